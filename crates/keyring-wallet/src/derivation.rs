//! Key derivation and import.
//!
//! Two entry paths meet at [`KeyPair`]:
//!
//! - `phrase -> seed -> private key`, where the private key is the first 32
//!   bytes of the 64-byte BIP-39 seed read as a big-endian scalar. This is a
//!   fixed truncation rule, not BIP-32; a scalar of zero or at least the
//!   curve order is rejected rather than reduced.
//! - an already-known private key as hex, WIF or raw bytes.
//!
//! Every function here is pure apart from the entropy draw in
//! [`generate_key_pair`]. Failures are returned, never logged.

use keyring_primitives::ec::{PrivateKey, PublicKey};
use keyring_primitives::mnemonic::{self, EntropyStrength, RecoveryPhrase, SeedBytes};
use rand::{CryptoRng, RngCore};

use crate::address::Address;
use crate::key_pair::KeyPair;
use crate::network::Network;
use crate::wallet::DerivedWallet;
use crate::WalletError;

/// Number of leading seed bytes used as the private scalar.
const SEED_KEY_BYTES: usize = 32;

/// Derive the key pair from BIP-39 seed bytes.
///
/// # Returns
/// `InvalidScalar` if the first 32 bytes are zero or not below the curve
/// order.
pub fn derive_from_seed(seed: &SeedBytes) -> Result<KeyPair, WalletError> {
    let private_key = PrivateKey::from_bytes(&seed.as_bytes()[..SEED_KEY_BYTES])?;
    Ok(KeyPair::new(private_key))
}

/// Import a private key from 64 hex digits (either case).
pub fn from_hex(hex: &str) -> Result<KeyPair, WalletError> {
    Ok(KeyPair::new(PrivateKey::from_hex(hex)?))
}

/// Import a private key from WIF (compressed or uncompressed, mainnet or
/// testnet version).
pub fn from_wif(wif: &str) -> Result<KeyPair, WalletError> {
    Ok(KeyPair::new(PrivateKey::from_wif(wif)?))
}

/// Import a private key from exactly 32 big-endian bytes.
pub fn from_raw_bytes(bytes: &[u8]) -> Result<KeyPair, WalletError> {
    Ok(KeyPair::new(PrivateKey::from_bytes(bytes)?))
}

/// Render the P2PKH address of `public_key` for `network`.
pub fn render_address(public_key: &PublicKey, network: Network) -> Address {
    Address::from_public_key(public_key, network)
}

/// Generate a new 24-word wallet for `network`.
pub fn generate_key_pair(network: Network) -> Result<DerivedWallet, WalletError> {
    generate_key_pair_with(EntropyStrength::default(), network)
}

/// Generate a new wallet with a chosen phrase length.
pub fn generate_key_pair_with(
    strength: EntropyStrength,
    network: Network,
) -> Result<DerivedWallet, WalletError> {
    let phrase = mnemonic::generate_phrase(strength)?;
    derive_wallet(phrase, network)
}

/// Generate a new wallet drawing entropy from `rng`.
pub fn generate_key_pair_from_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    strength: EntropyStrength,
    network: Network,
) -> Result<DerivedWallet, WalletError> {
    let phrase = mnemonic::generate_phrase_with(rng, strength)?;
    derive_wallet(phrase, network)
}

/// Recover a wallet from a user-supplied phrase.
///
/// The phrase is normalized and validated before any stretching; the
/// returned wallet carries the normalized form.
pub fn recover_key_pair(phrase: &str, network: Network) -> Result<DerivedWallet, WalletError> {
    let phrase = RecoveryPhrase::parse(phrase)?;
    derive_wallet(phrase, network)
}

fn derive_wallet(phrase: RecoveryPhrase, network: Network) -> Result<DerivedWallet, WalletError> {
    let seed = phrase.to_seed()?;
    let key_pair = derive_from_seed(&seed)?;
    let address = render_address(key_pair.public_key(), network);
    Ok(DerivedWallet {
        key_pair,
        phrase,
        network,
        address,
    })
}
