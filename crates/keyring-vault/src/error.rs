//! Error types for the secret vault.

use keyring_primitives::PrimitivesError;

/// Errors returned by a [`SecretStore`](crate::SecretStore).
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// No entry for the ticket; never issued, already redeemed, or revoked.
    #[error("no secret stored for this ticket")]
    NotFound,

    /// The entry outlived its time-to-live. It has been removed.
    #[error("secret for this ticket has expired")]
    Expired,

    /// The ticket string is not a valid ticket id.
    #[error("invalid ticket: {0}")]
    InvalidTicket(String),

    /// Key generation, sealing or opening failed.
    #[error("vault crypto error: {0}")]
    Crypto(#[from] PrimitivesError),

    /// The secret record could not be encoded or decoded.
    #[error("vault serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VaultError {
    /// Keeps only the error class and position; serde messages can quote
    /// the offending value.
    fn from(e: serde_json::Error) -> Self {
        VaultError::Serialization(format!(
            "{:?} error at line {} column {}",
            e.classify(),
            e.line(),
            e.column()
        ))
    }
}
