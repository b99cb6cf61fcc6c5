/// bsv-keyring - Cryptographic primitives for wallet key derivation.
///
/// This crate provides the foundational building blocks for bsv-keyring:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Base58 and Base58Check encoding
/// - secp256k1 private and public keys with WIF and SEC1 encodings
/// - BIP-39 recovery phrase generation, validation and seed stretching
/// - AES-256-GCM sealing for short-lived secrets

pub mod hash;
pub mod base58;
pub mod ec;
pub mod mnemonic;

mod error;
pub use error::PrimitivesError;
