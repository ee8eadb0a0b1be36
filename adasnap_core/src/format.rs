//! Rendering of the primitive values that end up on a confirmation screen.
use crate::{protocol_magics, DerivationPath, UnknownAddressKind};
use alloc::string::{String, ToString};

pub const ADA_TICKER: &str = "ADA";
pub const ADA_DECIMALS: u8 = 6;

/// The kind of Cardano address being shown. The discriminants are the
/// protocol's address type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AddressKind {
    Base = 0,
    Pointer = 4,
    Enterprise = 6,
    Legacy = 8,
    Reward = 14,
}

impl TryFrom<u8> for AddressKind {
    type Error = UnknownAddressKind;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => AddressKind::Base,
            4 => AddressKind::Pointer,
            6 => AddressKind::Enterprise,
            8 => AddressKind::Legacy,
            14 => AddressKind::Reward,
            tag => return Err(UnknownAddressKind(tag)),
        })
    }
}

/// Where a pointer address's stake registration certificate lives on chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
    pub block_index: u64,
    pub tx_index: u64,
    pub certificate_index: u64,
}

/// Renders `raw_units` scaled down by `10^decimals` with exactly `decimals`
/// fractional digits. Works on the decimal digits so there is no overflow or
/// rounding for any precision.
pub fn format_amount(raw_units: u64, decimals: u8) -> String {
    let decimals = decimals as usize;
    let digits = raw_units.to_string();
    let mut out = String::with_capacity(digits.len() + decimals + ADA_TICKER.len() + 3);

    if decimals == 0 {
        out.push_str(&digits);
    } else if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        out.push_str(whole);
        out.push('.');
        out.push_str(fraction);
    } else {
        out.push_str("0.");
        out.extend(core::iter::repeat('0').take(decimals - digits.len()));
        out.push_str(&digits);
    }

    out.push(' ');
    out.push_str(ADA_TICKER);
    out
}

/// Lovelace to ADA.
pub fn format_coin_amount(lovelace: u64) -> String {
    format_amount(lovelace, ADA_DECIMALS)
}

pub fn format_address_kind(kind: AddressKind) -> &'static str {
    match kind {
        AddressKind::Legacy => "Legacy",
        AddressKind::Base => "Base",
        AddressKind::Pointer => "Pointer",
        AddressKind::Enterprise => "Enterprise",
        AddressKind::Reward => "Reward",
    }
}

/// The network is informational so an unrecognised magic still renders.
pub fn format_network(magic: u32) -> String {
    match magic {
        protocol_magics::MAINNET => "Mainnet".to_string(),
        protocol_magics::TESTNET => "Testnet".to_string(),
        magic => format!("Unknown network ({magic})"),
    }
}

pub fn format_path(path: &DerivationPath) -> String {
    path.to_string()
}

pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
