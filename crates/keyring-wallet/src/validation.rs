//! Boolean validators for user input.
//!
//! Each check runs the same parser the import path uses, so "valid" here
//! means "would import". None of them panic or allocate error messages for
//! the caller.

use keyring_primitives::ec::PrivateKey;
use keyring_primitives::mnemonic;

use crate::address::Address;
use crate::network::Network;

/// True for 64 hex digits (either case) encoding a scalar in range.
pub fn is_valid_private_key_hex(hex: &str) -> bool {
    PrivateKey::from_hex(hex).is_ok()
}

/// True for a WIF that imports as a private key.
pub fn is_valid_wif(wif: &str) -> bool {
    PrivateKey::from_wif(wif).is_ok()
}

/// True for an English BIP-39 phrase with a valid checksum.
pub fn is_valid_seed_phrase(phrase: &str) -> bool {
    mnemonic::validate_phrase(phrase)
}

/// True for a well-formed P2PKH address on either network.
pub fn is_valid_address(address: &str) -> bool {
    Address::from_string(address).is_ok()
}

/// True for a well-formed P2PKH address on `network`.
pub fn is_valid_address_for(address: &str, network: Network) -> bool {
    Address::from_string(address)
        .map(|a| a.network() == network)
        .unwrap_or(false)
}
