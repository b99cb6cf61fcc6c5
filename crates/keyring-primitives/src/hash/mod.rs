//! Hash functions used by key and address encodings.
//!
//! SHA-256d backs every Base58Check checksum (WIF strings and addresses);
//! Hash160 turns a compressed public key into the 20-byte payload of a
//! P2PKH address.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of a Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute double SHA-256: SHA-256(SHA-256(data)).
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
///
/// # Arguments
/// * `data` - Byte slice to hash, typically a compressed public key.
///
/// # Returns
/// A 20-byte Hash160 digest.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// First four bytes of SHA-256d, the Base58Check checksum of `data`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
