//! AES-256-GCM sealing for short-lived secrets.
//!
//! Sealed format: nonce (12 bytes) || ciphertext || tag (16 bytes). The
//! associated data is authenticated but not stored; the same bytes must be
//! supplied again to open.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::PrimitivesError;

/// AES-GCM nonce length.
const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length.
const TAG_LEN: usize = 16;

/// A 256-bit AES-GCM key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    key: [u8; 32],
}

impl SymmetricKey {
    /// Wrap existing key bytes.
    pub fn new(key: [u8; 32]) -> Self {
        SymmetricKey { key }
    }

    /// Generate a random key from the OS random number generator.
    ///
    /// # Returns
    /// `EntropySourceFailure` if the OS source cannot be read.
    pub fn new_random() -> Result<Self, PrimitivesError> {
        let mut key = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| PrimitivesError::EntropySourceFailure(e.to_string()))?;
        Ok(SymmetricKey { key })
    }

    /// Encrypt and authenticate `plaintext`, binding it to `aad`.
    pub fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| PrimitivesError::EntropySourceFailure(e.to_string()))?;

        let ciphertext = self
            .cipher()?
            .encrypt(Nonce::from_slice(&nonce), Payload { msg: plaintext, aad })
            .map_err(|e| PrimitivesError::EncryptionError(e.to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    /// Verify and decrypt a message produced by [`seal`](Self::seal).
    pub fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(PrimitivesError::DecryptionError(
                "sealed message is too short".to_string(),
            ));
        }
        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        self.cipher()?
            .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext, aad })
            .map_err(|_| PrimitivesError::DecryptionError("authentication failed".to_string()))
    }

    fn cipher(&self) -> Result<Aes256Gcm, PrimitivesError> {
        Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| PrimitivesError::EncryptionError(e.to_string()))
    }
}
