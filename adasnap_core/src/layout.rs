//! The confirmations a Cardano request can ask the user for.
//!
//! Every function here builds its pages first and only then touches the
//! screen, so an `Err` always means the layout itself was broken and the user
//! saw nothing.
use crate::{
    pages::{self, StakingCredential},
    AddressKind, ButtonRequest, CancelStyle, ConfirmFlow, ConfirmStyle, ConfirmationOutcome,
    DerivationPath, LayoutError, Pointer, UserInteraction,
};

pub fn confirm_send(
    ui: &mut impl UserInteraction,
    amount: u64,
    to: &str,
) -> Result<bool, LayoutError> {
    let pages = pages::send_pages(&ui.geometry(), amount, to)?;
    let outcome = ConfirmFlow::new(
        pages,
        ConfirmStyle::Tap,
        CancelStyle::Decline,
        ButtonRequest::Other,
    )
    .run(ui);
    Ok(outcome.is_confirmed())
}

/// The total is what the user actually spends, so a tap isn't enough.
pub fn confirm_transaction_total(
    ui: &mut impl UserInteraction,
    amount: u64,
    fee: u64,
    network_magic: u32,
) -> Result<bool, LayoutError> {
    let pages = pages::transaction_total_pages(&ui.geometry(), amount, fee, network_magic)?;
    let outcome = ConfirmFlow::new(
        pages,
        ConfirmStyle::Hold,
        CancelStyle::Decline,
        ButtonRequest::Other,
    )
    .run(ui);
    Ok(outcome.is_confirmed())
}

/// Cardano addresses don't fit on one screen so the address is spread over as
/// many pages as it needs.
pub fn show_address(
    ui: &mut impl UserInteraction,
    address: &str,
    kind: AddressKind,
    path: &DerivationPath,
    network: Option<u32>,
) -> Result<ConfirmationOutcome, LayoutError> {
    let pages = pages::address_pages(&ui.geometry(), address, kind, path, network)?;
    Ok(ConfirmFlow::new(
        pages,
        ConfirmStyle::Tap,
        CancelStyle::Alternative { label: "QR" },
        ButtonRequest::Address,
    )
    .run(ui))
}

pub fn warn_foreign_staking_key(
    ui: &mut impl UserInteraction,
    spending_account_path: &DerivationPath,
    staking: &StakingCredential,
) -> Result<(), LayoutError> {
    let screens = pages::foreign_staking_key_pages(&ui.geometry(), spending_account_path, staking)?;
    for pages in screens {
        acknowledge(ui, pages);
    }
    Ok(())
}

pub fn warn_pointer_address(
    ui: &mut impl UserInteraction,
    pointer: &Pointer,
) -> Result<(), LayoutError> {
    let pages = pages::pointer_address_pages(&ui.geometry(), pointer)?;
    acknowledge(ui, pages);
    Ok(())
}

fn acknowledge(ui: &mut impl UserInteraction, pages: pages::PageSequence) {
    let outcome = ConfirmFlow::new(
        pages,
        ConfirmStyle::Acknowledge,
        CancelStyle::None,
        ButtonRequest::Warning,
    )
    .run(ui);
    debug_assert!(outcome.is_confirmed(), "warnings can only be acknowledged");
}
