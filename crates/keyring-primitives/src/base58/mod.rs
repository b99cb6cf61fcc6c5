//! Base58 and Base58Check encoding.
//!
//! WIF private keys and P2PKH addresses are both `version || payload`
//! strings protected by a four-byte SHA-256d checksum. Decoding keeps the
//! version byte in the returned payload; callers interpret it.

use crate::hash::{checksum, CHECKSUM_LEN};
use crate::PrimitivesError;

/// Encode a byte slice to a Base58 string (Bitcoin alphabet).
///
/// Leading zero bytes are encoded as leading '1' characters.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// The error names the failure class only; the offending character is not
/// reported because the input may be a private key.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { .. } => {
                PrimitivesError::InvalidBase58("character outside the base58 alphabet".to_string())
            }
            bs58::decode::Error::NonAsciiCharacter { .. } => {
                PrimitivesError::InvalidBase58("non-ascii character".to_string())
            }
            _ => PrimitivesError::InvalidBase58("undecodable input".to_string()),
        })
}

/// Append the four-byte SHA-256d checksum to `data` and Base58-encode it.
///
/// # Arguments
/// * `data` - Version byte followed by payload.
///
/// # Returns
/// The Base58Check string.
pub fn check_encode(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum(data));
    encode(&payload)
}

/// Decode a Base58Check string and verify its checksum.
///
/// # Arguments
/// * `s` - The Base58Check string.
///
/// # Returns
/// `Ok(Vec<u8>)` with the checksum stripped (version byte retained), or
/// `InvalidBase58` / `ChecksumMismatch`.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let mut decoded = decode(s)?;
    if decoded.len() <= CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let split = decoded.len() - CHECKSUM_LEN;
    if decoded[split..] != checksum(&decoded[..split]) {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    decoded.truncate(split);
    Ok(decoded)
}
