//! Hierarchical deterministic key support for address derivation.
//!
//! Provides network parameters for mainnet, testnet and simnet, BIP-32
//! extended public key parsing and non-hardened child derivation, and
//! P2PKH (base58check) address encoding.

pub mod address;
pub mod error;
pub mod network;
pub mod xpub;

pub use address::{validate_address, P2pkhAddress};
pub use error::HdError;
pub use network::{HdNetwork, NetParams};
pub use xpub::ExtendedPubKey;
