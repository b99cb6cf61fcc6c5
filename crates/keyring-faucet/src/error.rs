//! Error types for faucet and explorer operations.

/// Errors that can occur when talking to the faucet or the explorer.
#[derive(Debug, thiserror::Error)]
pub enum FaucetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Server returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Error message from server.
        message: String,
    },

    /// Resource not found (404).
    #[error("not found")]
    NotFound,

    /// The explorer reported balance parts whose sum is out of range.
    #[error("explorer balance is out of range")]
    InvalidBalance,

    /// The faucet only pays testnet addresses.
    #[error("faucet requests require a testnet address")]
    MainnetAddress,
}
