/// bsv-keyring - Wallet key derivation and recovery.
///
/// Turns a BIP-39 recovery phrase into a secp256k1 key pair and a P2PKH
/// address, imports already-known private keys, and packages the result
/// into a persistable public record plus a one-time secret record.

mod error;
pub use error::WalletError;

pub mod network;
pub mod address;
pub mod key_pair;
pub mod derivation;
pub mod wallet;
pub mod validation;
pub mod config;
pub mod factory;

pub use address::Address;
pub use config::WalletConfig;
pub use derivation::{
    derive_from_seed, from_hex, from_raw_bytes, from_wif, generate_key_pair,
    generate_key_pair_with, recover_key_pair, render_address,
};
pub use factory::WalletFactory;
pub use key_pair::{KeyMaterial, KeyPair};
pub use network::Network;
pub use wallet::{DerivedWallet, SecureWalletInfo, WalletDetails};
