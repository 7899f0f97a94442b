use chain_hd::{ExtendedPubKey, HdNetwork, P2pkhAddress};

use crate::error::RangeError;

/// Key-derivation capability the range operations are written against.
///
/// `child` must report an index that yields no valid key as
/// [`RangeError::InvalidChild`]; every other error aborts a range.
pub trait HdKey: Sized {
    type Address;

    fn parse(s: &str) -> Result<Self, RangeError>;

    fn is_for_net(&self, network: HdNetwork) -> bool;

    fn child(&self, index: u32) -> Result<Self, RangeError>;

    fn address(&self, network: HdNetwork) -> Result<Self::Address, RangeError>;
}

impl HdKey for ExtendedPubKey {
    type Address = P2pkhAddress;

    fn parse(s: &str) -> Result<Self, RangeError> {
        Ok(s.parse::<ExtendedPubKey>()?)
    }

    fn is_for_net(&self, network: HdNetwork) -> bool {
        ExtendedPubKey::is_for_net(self, network)
    }

    fn child(&self, index: u32) -> Result<Self, RangeError> {
        Ok(ExtendedPubKey::child(self, index)?)
    }

    fn address(&self, network: HdNetwork) -> Result<Self::Address, RangeError> {
        Ok(ExtendedPubKey::address(self, network)?)
    }
}
