#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate alloc;

pub mod error;
pub mod flow;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod paginate;
pub mod pages;
pub mod palette;
pub mod path;

pub use error::{LayoutError, PathError, UnknownAddressKind};
pub use flow::{ConfirmFlow, ConfirmationOutcome, FlowState};
pub use format::{AddressKind, Pointer};
pub use geometry::DisplayGeometry;
pub use interaction::{
    ButtonRequest, CancelStyle, ConfirmStyle, Controls, Gesture, UserInteraction,
};
pub use layout::{
    confirm_send, confirm_transaction_total, show_address, warn_foreign_staking_key,
    warn_pointer_address,
};
pub use paginate::{chunk, paginate, Chunks};
pub use pages::{
    DisplayLine, Emphasis, Icon, Page, PageHeader, PageSequence, StakingCredential, TextPage,
    Tint,
};
pub use path::DerivationPath;

pub mod protocol_magics {
    pub const MAINNET: u32 = 764824073;
    pub const TESTNET: u32 = 42;
}
