//! secp256k1 private key with wallet import encodings.
//!
//! Wraps a k256 signing key and adds the three external representations a
//! wallet hands to its owner: lowercase hex, WIF, and the raw 32-byte
//! big-endian scalar.

use std::fmt;

use k256::ecdsa::SigningKey;
use k256::FieldBytes;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Mainnet WIF version byte. All WIF strings produced by this crate use it.
pub const MAINNET_WIF_PREFIX: u8 = 0x80;

/// Testnet WIF version byte. Accepted on import.
pub const TESTNET_WIF_PREFIX: u8 = 0xef;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// Decoded WIF payload length without checksum: prefix + key + flag.
const WIF_COMPRESSED_LEN: usize = 1 + PRIVATE_KEY_BYTES_LEN + 1;

/// Decoded WIF payload length without checksum: prefix + key.
const WIF_UNCOMPRESSED_LEN: usize = 1 + PRIVATE_KEY_BYTES_LEN;

/// A secp256k1 private key.
///
/// Holds exactly one scalar in `[1, n-1]`. The scalar is wiped when the key
/// is dropped (k256 zeroizes `SigningKey` on drop), and `Debug` prints only
/// the corresponding public key.
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Arguments
    /// * `bytes` - Exactly 32 bytes.
    ///
    /// # Returns
    /// `MalformedKeyEncoding` when the slice is not 32 bytes long, and
    /// `InvalidScalar` when the value is zero or not below the curve order.
    /// Out-of-range values are rejected, never reduced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::MalformedKeyEncoding(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_bytes(FieldBytes::from_slice(bytes))
            .map_err(|_| PrimitivesError::InvalidScalar)?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a 64-character hexadecimal string.
    ///
    /// Upper- and lowercase digits are both accepted. Length and digit
    /// checks happen before any scalar validation, so a 63-character string
    /// is always `MalformedKeyEncoding`, while 64 zeros is `InvalidScalar`.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.len() != PRIVATE_KEY_BYTES_LEN * 2 {
            return Err(PrimitivesError::MalformedKeyEncoding(format!(
                "expected {} hex characters, got {}",
                PRIVATE_KEY_BYTES_LEN * 2,
                hex_str.len()
            )));
        }
        let mut bytes = [0u8; PRIVATE_KEY_BYTES_LEN];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|_| {
            PrimitivesError::MalformedKeyEncoding("non-hexadecimal character".to_string())
        })?;
        let key = Self::from_bytes(&bytes);
        zeroize::Zeroize::zeroize(&mut bytes);
        key
    }

    /// Create a private key from a WIF (Wallet Import Format) string.
    ///
    /// Accepts compressed (38 decoded bytes, flag 0x01) and uncompressed
    /// (37 decoded bytes) forms with either the mainnet (0x80) or testnet
    /// (0xef) version byte.
    ///
    /// # Returns
    /// `MalformedKeyEncoding` for any structural fault (alphabet, length,
    /// flag, checksum, version), `InvalidScalar` for an out-of-range key.
    pub fn from_wif(wif: &str) -> Result<Self, PrimitivesError> {
        let payload = zeroize::Zeroizing::new(base58::check_decode(wif).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => {
                PrimitivesError::MalformedKeyEncoding("WIF checksum mismatch".to_string())
            }
            _ => PrimitivesError::MalformedKeyEncoding("WIF is not valid base58".to_string()),
        })?);

        match payload.len() {
            WIF_COMPRESSED_LEN => {
                if payload[WIF_COMPRESSED_LEN - 1] != COMPRESS_MAGIC {
                    return Err(PrimitivesError::MalformedKeyEncoding(
                        "invalid WIF compression flag".to_string(),
                    ));
                }
            }
            WIF_UNCOMPRESSED_LEN => {}
            n => {
                return Err(PrimitivesError::MalformedKeyEncoding(format!(
                    "invalid WIF payload length {}",
                    n
                )));
            }
        }

        match payload[0] {
            MAINNET_WIF_PREFIX | TESTNET_WIF_PREFIX => {}
            v => {
                return Err(PrimitivesError::MalformedKeyEncoding(format!(
                    "unknown WIF version byte 0x{:02x}",
                    v
                )));
            }
        }

        Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])
    }

    /// Encode as a compressed WIF string with the mainnet prefix (0x80).
    ///
    /// The WIF form is network-agnostic in this system: wallets on both
    /// networks export the same string.
    pub fn to_wif(&self) -> String {
        self.to_wif_prefix(MAINNET_WIF_PREFIX)
    }

    /// Encode as a compressed WIF string with a custom version byte.
    pub fn to_wif_prefix(&self, prefix: u8) -> String {
        let mut payload = zeroize::Zeroizing::new(Vec::with_capacity(WIF_COMPRESSED_LEN));
        payload.push(prefix);
        payload.extend_from_slice(&self.inner.to_bytes());
        payload.push(COMPRESS_MAGIC);
        base58::check_encode(&payload)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES_LEN] {
        self.inner.to_bytes().into()
    }

    /// Serialize the private key as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.inner.to_bytes())
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("pub_key", &self.pub_key().to_hex())
            .finish_non_exhaustive()
    }
}
