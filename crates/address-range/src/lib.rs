//! Deterministic address ranges from BIP-32 extended keys.
//!
//! The generic operations in [`range`] work against any [`HdKey`]. The
//! functions below fix the key type to [`ExtendedPubKey`] and P2PKH
//! addresses, which is what the command-line front end uses.

pub mod error;
pub mod key;
pub mod range;
pub mod types;

pub use chain_hd::{ExtendedPubKey, HdNetwork, P2pkhAddress};
pub use error::RangeError;
pub use key::HdKey;
pub use range::{
    derive_at_branch_index, derive_range, derive_range_from_account_key,
    derive_range_from_account_key_str, derive_range_from_str, parse_key_for_net,
};
pub use types::{AddressRange, Branch, EXTERNAL_BRANCH, INTERNAL_BRANCH};

// ─── Extended public key entry points ───────────────────────────────

/// Addresses of the direct children `start..` of a serialized extended key.
pub fn address_range(
    xkey: &str,
    start: u32,
    count: u32,
    network: HdNetwork,
) -> Result<AddressRange<P2pkhAddress>, RangeError> {
    range::derive_range_from_str::<ExtendedPubKey>(xkey, start, count, network)
}

/// Addresses on `branch` of a serialized account key.
pub fn account_address_range(
    xkey: &str,
    start: u32,
    count: u32,
    branch: u32,
    network: HdNetwork,
) -> Result<AddressRange<P2pkhAddress>, RangeError> {
    range::derive_range_from_account_key_str::<ExtendedPubKey>(xkey, start, count, branch, network)
}

/// Address at `index` on `branch` of a serialized account key.
pub fn address_at_branch_index(
    xkey: &str,
    index: u32,
    branch: u32,
    network: HdNetwork,
) -> Result<P2pkhAddress, RangeError> {
    let key: ExtendedPubKey = range::parse_key_for_net(xkey, network)?;
    range::derive_at_branch_index(&key, index, branch, network)
}
