//! secp256k1 public key with the encodings a wallet record stores.
//!
//! The compressed SEC1 form is canonical: it is what gets hex-encoded into
//! wallet records, what the DER rendering returns, and what Hash160 is taken
//! over when building an address.

use std::fmt;

use k256::ecdsa::VerifyingKey;

use crate::hash::hash160;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
pub const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
pub const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from SEC1 encoded bytes (33 or 65 bytes).
    ///
    /// # Returns
    /// `InvalidPublicKey` if the bytes are empty or do not encode a point
    /// on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "public key is empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| {
            PrimitivesError::InvalidPublicKey(format!(
                "{} bytes do not encode a secp256k1 point",
                bytes.len()
            ))
        })?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize in compressed SEC1 format (0x02/0x03 prefix + X).
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize in uncompressed SEC1 format (0x04 prefix + X + Y).
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Lowercase hex of the compressed encoding (66 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// DER rendering of the public key.
    ///
    /// For secp256k1 wallet keys this is the compressed SEC1 encoding, the
    /// same bytes `to_compressed` returns.
    pub fn to_der(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }

    /// Hex of the DER rendering.
    pub fn to_der_hex(&self) -> String {
        hex::encode(self.to_der())
    }

    /// RIPEMD160(SHA256(compressed)), the P2PKH address payload.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
