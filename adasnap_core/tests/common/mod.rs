use adasnap_core::{
    ButtonRequest, Controls, DisplayGeometry, Gesture, Page, UserInteraction,
};
use std::collections::VecDeque;

/// Plays back a fixed list of gestures and records what was put on screen.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pub geometry: DisplayGeometry,
    pub gestures: VecDeque<Gesture>,
    pub presented: Vec<(Page, Controls)>,
    pub button_requests: Vec<ButtonRequest>,
}

impl ScriptedUi {
    pub fn new(gestures: impl IntoIterator<Item = Gesture>) -> Self {
        Self {
            gestures: gestures.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn presented_indexes(&self) -> Vec<usize> {
        self.presented
            .iter()
            .map(|(_, controls)| controls.index)
            .collect()
    }

    pub fn presented_text(&self) -> Vec<String> {
        self.presented
            .iter()
            .flat_map(|(page, _)| page.lines().iter().map(|line| line.text().to_string()))
            .collect()
    }
}

impl UserInteraction for ScriptedUi {
    fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    fn button_request(&mut self, request: ButtonRequest) {
        self.button_requests.push(request);
    }

    fn present(&mut self, page: &Page, controls: &Controls) {
        self.presented.push((page.clone(), *controls));
    }

    fn await_gesture(&mut self) -> Gesture {
        self.gestures
            .pop_front()
            .expect("flow waited for a gesture the test didn't script")
    }
}
