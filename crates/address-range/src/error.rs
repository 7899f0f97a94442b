use chain_hd::{HdError, HdNetwork};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Malformed extended key: {0}")]
    KeyParse(String),

    #[error("Extended key is for wrong network (expected {expected})")]
    WrongNetwork { expected: HdNetwork },

    #[error("Invalid child at index {0}")]
    InvalidChild(u32),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    #[error("Address encoding failed: {0}")]
    Encoding(String),

    #[error("Derivation index overflow: start {start} + count {count} + skipped {skipped} exceeds u32")]
    IndexOverflow { start: u32, count: u32, skipped: u32 },
}

impl From<HdError> for RangeError {
    fn from(e: HdError) -> Self {
        match e {
            HdError::InvalidChild(index) => RangeError::InvalidChild(index),
            HdError::InvalidExtendedKey(msg) => RangeError::KeyParse(msg),
            HdError::PrivateKeyNotAccepted => RangeError::KeyParse(e.to_string()),
            HdError::InvalidPublicKey(_) | HdError::InvalidAddress(_) => {
                RangeError::Encoding(e.to_string())
            }
            HdError::HardenedFromPublic(_) | HdError::MaxDepth | HdError::UnknownNetwork(_) => {
                RangeError::Derivation(e.to_string())
            }
        }
    }
}
