use keyring_primitives::PrimitivesError;

/// Error types for wallet operations.
///
/// The first four kinds are the ones derivation and recovery callers match
/// on; they are lifted out of [`PrimitivesError`] so callers never need to
/// reach into the lower crate.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("invalid recovery phrase: {0}")]
    InvalidPhrase(String),
    #[error("malformed key encoding: {0}")]
    MalformedKeyEncoding(String),
    #[error("private key scalar is zero or not below the curve order")]
    InvalidScalar,
    #[error("secure random source unavailable: {0}")]
    EntropySourceFailure(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("primitives error: {0}")]
    Primitives(PrimitivesError),
}

impl From<PrimitivesError> for WalletError {
    fn from(e: PrimitivesError) -> Self {
        match e {
            PrimitivesError::InvalidPhrase(reason) => WalletError::InvalidPhrase(reason),
            PrimitivesError::MalformedKeyEncoding(reason) => {
                WalletError::MalformedKeyEncoding(reason)
            }
            PrimitivesError::InvalidScalar => WalletError::InvalidScalar,
            PrimitivesError::EntropySourceFailure(reason) => {
                WalletError::EntropySourceFailure(reason)
            }
            other => WalletError::Primitives(other),
        }
    }
}
