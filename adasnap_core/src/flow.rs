//! Walking the user through a [`PageSequence`] until they accept or back out.
use crate::{
    ButtonRequest, CancelStyle, ConfirmStyle, Controls, Gesture, Page, PageSequence,
    UserInteraction,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationOutcome {
    Confirmed,
    Declined,
    /// The user backed out but asked to verify another way (e.g. scanning a QR code).
    DeclinedWithAlternative,
}

impl ConfirmationOutcome {
    pub fn is_confirmed(self) -> bool {
        self == ConfirmationOutcome::Confirmed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    /// Showing a page that isn't the last one.
    Presenting(usize),
    /// Showing the last page.
    AwaitingFinalGesture,
    Resolved(ConfirmationOutcome),
}

#[derive(Clone, Debug)]
pub struct ConfirmFlow {
    pages: PageSequence,
    confirm: ConfirmStyle,
    cancel: CancelStyle,
    request: ButtonRequest,
    state: FlowState,
}

impl ConfirmFlow {
    pub fn new(
        pages: PageSequence,
        confirm: ConfirmStyle,
        cancel: CancelStyle,
        request: ButtonRequest,
    ) -> Self {
        let mut flow = Self {
            pages,
            confirm,
            cancel,
            request,
            state: FlowState::AwaitingFinalGesture,
        };
        flow.state = flow.presenting(0);
        flow
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn pages(&self) -> &PageSequence {
        &self.pages
    }

    /// The page on screen, `None` once resolved.
    pub fn page_index(&self) -> Option<usize> {
        match self.state {
            FlowState::Presenting(index) => Some(index),
            FlowState::AwaitingFinalGesture => Some(self.pages.last_index()),
            FlowState::Resolved(_) => None,
        }
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.page_index()?)
    }

    pub fn controls(&self, index: usize) -> Controls {
        Controls {
            index,
            count: self.pages.len(),
            confirm: self.confirm,
            cancel: self.cancel,
        }
    }

    fn presenting(&self, index: usize) -> FlowState {
        if index >= self.pages.last_index() {
            FlowState::AwaitingFinalGesture
        } else {
            FlowState::Presenting(index)
        }
    }

    /// Applies one gesture. Gestures that mean nothing where the flow is
    /// leave the state as it was.
    pub fn step(&mut self, gesture: Gesture) -> FlowState {
        let next = match (self.state, gesture) {
            (FlowState::Resolved(_), _) => None,
            (_, Gesture::Decline) if self.cancel != CancelStyle::None => {
                Some(FlowState::Resolved(ConfirmationOutcome::Declined))
            }
            (_, Gesture::Alternative) if matches!(self.cancel, CancelStyle::Alternative { .. }) => {
                Some(FlowState::Resolved(
                    ConfirmationOutcome::DeclinedWithAlternative,
                ))
            }
            (FlowState::Presenting(index), Gesture::Next) => Some(self.presenting(index + 1)),
            (FlowState::AwaitingFinalGesture, Gesture::HoldConfirm) => {
                Some(FlowState::Resolved(ConfirmationOutcome::Confirmed))
            }
            (FlowState::AwaitingFinalGesture, Gesture::Confirm)
                if self.confirm != ConfirmStyle::Hold =>
            {
                Some(FlowState::Resolved(ConfirmationOutcome::Confirmed))
            }
            _ => None,
        };

        match next {
            Some(next) => self.state = next,
            None => {
                #[cfg(feature = "tracing")]
                tracing::event!(
                    tracing::Level::DEBUG,
                    gesture = ?gesture,
                    state = ?self.state,
                    "ignoring gesture"
                );
            }
        }
        self.state
    }

    /// Shows the pages in order and waits on the user until the flow resolves.
    pub fn run(mut self, ui: &mut impl UserInteraction) -> ConfirmationOutcome {
        ui.button_request(self.request);
        #[cfg(feature = "tracing")]
        tracing::event!(
            tracing::Level::DEBUG,
            request = ?self.request,
            pages = self.pages.len(),
            "starting confirmation"
        );

        let mut on_screen = None;
        loop {
            let index = match self.state {
                FlowState::Resolved(outcome) => {
                    #[cfg(feature = "tracing")]
                    tracing::event!(
                        tracing::Level::INFO,
                        outcome = ?outcome,
                        "confirmation resolved"
                    );
                    return outcome;
                }
                FlowState::Presenting(index) => index,
                FlowState::AwaitingFinalGesture => self.pages.last_index(),
            };

            if on_screen != Some(index) {
                #[cfg(feature = "tracing")]
                tracing::event!(tracing::Level::DEBUG, page = index, "presenting page");
                ui.present(&self.pages.pages()[index], &self.controls(index));
                on_screen = Some(index);
            }

            let gesture = ui.await_gesture();
            self.step(gesture);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DisplayLine, Emphasis, Icon, PageHeader, Tint};
    use alloc::vec::Vec;

    fn sequence(n: usize) -> PageSequence {
        let header = PageHeader::new("Confirm transaction", Icon::Send, Tint::Green);
        PageSequence::new(
            (0..n)
                .map(|i| {
                    let line = DisplayLine::new(format!("page {i}"), Emphasis::Bold, 17).unwrap();
                    Page::new(header.clone(), vec![line], 4).unwrap()
                })
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    fn flow(n: usize, confirm: ConfirmStyle, cancel: CancelStyle) -> ConfirmFlow {
        ConfirmFlow::new(sequence(n), confirm, cancel, ButtonRequest::Other)
    }

    #[test]
    fn single_page_starts_on_final_gesture() {
        let flow = flow(1, ConfirmStyle::Tap, CancelStyle::Decline);
        assert_eq!(flow.state(), FlowState::AwaitingFinalGesture);
        assert_eq!(flow.page_index(), Some(0));
    }

    #[test]
    fn next_walks_to_the_last_page_and_stops() {
        let mut flow = flow(3, ConfirmStyle::Tap, CancelStyle::Decline);
        assert_eq!(flow.state(), FlowState::Presenting(0));
        assert_eq!(flow.step(Gesture::Next), FlowState::Presenting(1));
        assert_eq!(flow.step(Gesture::Next), FlowState::AwaitingFinalGesture);
        assert_eq!(flow.step(Gesture::Next), FlowState::AwaitingFinalGesture);
        assert_eq!(flow.page_index(), Some(2));
    }

    #[test]
    fn confirming_early_does_nothing() {
        let mut flow = flow(2, ConfirmStyle::Tap, CancelStyle::Decline);
        assert_eq!(flow.step(Gesture::Confirm), FlowState::Presenting(0));
        assert_eq!(flow.step(Gesture::HoldConfirm), FlowState::Presenting(0));
        flow.step(Gesture::Next);
        assert_eq!(
            flow.step(Gesture::Confirm),
            FlowState::Resolved(ConfirmationOutcome::Confirmed)
        );
    }

    #[test]
    fn hold_flow_ignores_taps() {
        let mut flow = flow(1, ConfirmStyle::Hold, CancelStyle::Decline);
        assert_eq!(flow.step(Gesture::Confirm), FlowState::AwaitingFinalGesture);
        assert_eq!(
            flow.step(Gesture::HoldConfirm),
            FlowState::Resolved(ConfirmationOutcome::Confirmed)
        );
    }

    #[test]
    fn decline_anywhere_resolves() {
        let mut flow = flow(3, ConfirmStyle::Tap, CancelStyle::Decline);
        flow.step(Gesture::Next);
        assert_eq!(
            flow.step(Gesture::Decline),
            FlowState::Resolved(ConfirmationOutcome::Declined)
        );
        assert_eq!(flow.page_index(), None);
        // resolved is terminal
        assert_eq!(
            flow.step(Gesture::Confirm),
            FlowState::Resolved(ConfirmationOutcome::Declined)
        );
    }

    #[test]
    fn alternative_only_when_offered() {
        let mut plain = flow(2, ConfirmStyle::Tap, CancelStyle::Decline);
        assert_eq!(plain.step(Gesture::Alternative), FlowState::Presenting(0));

        let mut qr = flow(2, ConfirmStyle::Tap, CancelStyle::Alternative { label: "QR" });
        assert_eq!(
            qr.step(Gesture::Alternative),
            FlowState::Resolved(ConfirmationOutcome::DeclinedWithAlternative)
        );
    }

    #[test]
    fn acknowledgement_cannot_be_declined() {
        let mut flow = flow(2, ConfirmStyle::Acknowledge, CancelStyle::None);
        assert_eq!(flow.step(Gesture::Decline), FlowState::Presenting(0));
        assert_eq!(flow.step(Gesture::Alternative), FlowState::Presenting(0));
        flow.step(Gesture::Next);
        assert_eq!(
            flow.step(Gesture::Confirm),
            FlowState::Resolved(ConfirmationOutcome::Confirmed)
        );
    }
}
