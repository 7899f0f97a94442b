//! BIP-32 extended public keys.
//!
//! Parsing and child derivation go through the `bip32` crate. The key keeps
//! the version prefix it was serialized with, which is how its network is
//! identified.

use std::fmt;
use std::str::FromStr;

use bip32::{ChildNumber, ExtendedKey, Prefix, XPub};

use crate::address::P2pkhAddress;
use crate::error::HdError;
use crate::network::HdNetwork;

/// Extended public key tagged with its serialization prefix.
#[derive(Clone)]
pub struct ExtendedPubKey {
    inner: XPub,
    prefix: Prefix,
}

impl ExtendedPubKey {
    /// Version bytes the key was serialized with.
    pub fn version(&self) -> u32 {
        self.prefix.version()
    }

    /// Network the key belongs to, if its version is one of ours.
    pub fn network(&self) -> Option<HdNetwork> {
        HdNetwork::from_public_version(self.version())
    }

    pub fn is_for_net(&self, network: HdNetwork) -> bool {
        self.version() == network.params().hd_public_version
    }

    pub fn depth(&self) -> u8 {
        self.inner.attrs().depth
    }

    pub fn child_number(&self) -> u32 {
        u32::from(self.inner.attrs().child_number)
    }

    /// Compressed SEC1 encoding of the public key.
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.inner.to_bytes()
    }

    /// Derive the non-hardened child at `index`.
    ///
    /// Returns [`HdError::InvalidChild`] when the index produces a tweak outside
    /// the curve order or the point at infinity; the next index should be used.
    pub fn child(&self, index: u32) -> Result<Self, HdError> {
        let child_number =
            ChildNumber::new(index, false).map_err(|_| HdError::HardenedFromPublic(index))?;

        let inner = self.inner.derive_child(child_number).map_err(|e| match e {
            bip32::Error::Crypto => HdError::InvalidChild(index),
            bip32::Error::Depth => HdError::MaxDepth,
            bip32::Error::ChildNumber => HdError::HardenedFromPublic(index),
            other => HdError::InvalidPublicKey(other.to_string()),
        })?;

        Ok(Self {
            inner,
            prefix: self.prefix,
        })
    }

    /// P2PKH address of this key on `network`.
    pub fn address(&self, network: HdNetwork) -> Result<P2pkhAddress, HdError> {
        P2pkhAddress::from_pubkey(&self.public_key_bytes(), network)
    }

    /// Serialize the same node under another network's prefix.
    pub fn to_string_for(&self, network: HdNetwork) -> String {
        self.inner
            .to_extended_key(network.public_prefix())
            .to_string()
    }
}

impl FromStr for ExtendedPubKey {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let extended: ExtendedKey = s
            .parse()
            .map_err(|e: bip32::Error| HdError::InvalidExtendedKey(e.to_string()))?;

        let version = extended.prefix.version();
        let is_known_private = HdNetwork::ALL
            .into_iter()
            .any(|net| net.params().hd_private_version == version);
        if is_known_private || extended.prefix.is_private() {
            return Err(HdError::PrivateKeyNotAccepted);
        }

        let prefix = extended.prefix;
        let inner = XPub::try_from(extended)
            .map_err(|e| HdError::InvalidExtendedKey(e.to_string()))?;

        Ok(Self { inner, prefix })
    }
}

impl fmt::Display for ExtendedPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.to_extended_key(self.prefix).to_string())
    }
}

impl fmt::Debug for ExtendedPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPubKey")
            .field("prefix", &self.prefix.as_str())
            .field("depth", &self.depth())
            .field("child_number", &self.child_number())
            .finish()
    }
}

impl PartialEq for ExtendedPubKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for ExtendedPubKey {}
