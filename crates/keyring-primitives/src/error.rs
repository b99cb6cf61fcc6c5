/// Unified error type for all primitives operations.
///
/// Messages never carry the offending input: a malformed private key or a
/// mistyped recovery phrase is secret material and must not be echoed back.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid recovery phrase: {0}")]
    InvalidPhrase(String),

    #[error("malformed key encoding: {0}")]
    MalformedKeyEncoding(String),

    #[error("private key scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("secure random source unavailable: {0}")]
    EntropySourceFailure(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("encryption error: {0}")]
    EncryptionError(String),

    #[error("decryption error: {0}")]
    DecryptionError(String),
}
