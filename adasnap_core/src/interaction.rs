use crate::{DisplayGeometry, Page};
use serde::{Deserialize, Serialize};

/// The screen and buttons a confirmation runs on.
///
/// The caller owns the implementation and lends it to one confirmation at a
/// time.
pub trait UserInteraction {
    fn geometry(&self) -> DisplayGeometry {
        DisplayGeometry::default()
    }

    /// Sent once before the first page of a confirmation is shown.
    fn button_request(&mut self, request: ButtonRequest);

    fn present(&mut self, page: &Page, controls: &Controls);

    /// Blocks until the user does something.
    fn await_gesture(&mut self) -> Gesture;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    Next,
    Confirm,
    HoldConfirm,
    Decline,
    Alternative,
}

/// Passed through to the host so it knows why the device is waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonRequest {
    Other,
    Address,
    Warning,
}

/// What it takes to accept on the last page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmStyle {
    Tap,
    /// Only a sustained press counts
    Hold,
    /// The user has to acknowledge and there is no way to decline
    Acknowledge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelStyle {
    Decline,
    /// Declining is offered alongside another way to proceed, e.g. showing a QR code
    Alternative { label: &'static str },
    None,
}

/// Everything the screen needs to draw the buttons under a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub index: usize,
    pub count: usize,
    pub confirm: ConfirmStyle,
    pub cancel: CancelStyle,
}

impl Controls {
    pub fn is_last_page(&self) -> bool {
        self.index + 1 == self.count
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.confirm {
            ConfirmStyle::Tap => "Confirm",
            ConfirmStyle::Hold => "Hold to confirm",
            ConfirmStyle::Acknowledge => "Ok",
        }
    }

    pub fn cancel_label(&self) -> Option<&'static str> {
        match self.cancel {
            CancelStyle::Decline => Some("Cancel"),
            CancelStyle::Alternative { label } => Some(label),
            CancelStyle::None => None,
        }
    }
}
