use thiserror::Error;

/// Extended key and address errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HdError {
    #[error("invalid extended key: {0}")]
    InvalidExtendedKey(String),

    #[error("private extended keys are not accepted")]
    PrivateKeyNotAccepted,

    #[error("invalid child at index {0}")]
    InvalidChild(u32),

    #[error("cannot derive hardened child {0} from a public key")]
    HardenedFromPublic(u32),

    #[error("maximum derivation depth exceeded")]
    MaxDepth,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
