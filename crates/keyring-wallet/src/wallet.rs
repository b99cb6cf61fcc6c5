//! Wallet records.
//!
//! A freshly generated or recovered wallet is split in two before it leaves
//! this crate: [`WalletDetails`] holds only public fields and is what gets
//! persisted, [`SecureWalletInfo`] holds the phrase and WIF and is handed to
//! the caller once for display or sealed transport.

use std::fmt;

use keyring_primitives::ec::PublicKey;
use keyring_primitives::mnemonic::RecoveryPhrase;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::Address;
use crate::key_pair::KeyPair;
use crate::network::Network;
use crate::WalletError;

/// Result of generating or recovering a wallet from a phrase.
pub struct DerivedWallet {
    pub(crate) key_pair: KeyPair,
    pub(crate) phrase: RecoveryPhrase,
    pub(crate) network: Network,
    pub(crate) address: Address,
}

impl DerivedWallet {
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// The normalized recovery phrase.
    pub fn phrase(&self) -> &RecoveryPhrase {
        &self.phrase
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The public record, leaving the wallet intact.
    pub fn details(&self) -> WalletDetails {
        WalletDetails::new(&self.address, self.key_pair.public_key(), self.network)
    }

    /// Split into the public record and the one-time secret record.
    pub fn into_parts(self) -> (WalletDetails, SecureWalletInfo) {
        let details = self.details();
        let secure = SecureWalletInfo::new(
            self.phrase.as_str().to_string(),
            self.key_pair.private_key_wif(),
        );
        (details, secure)
    }
}

impl fmt::Debug for DerivedWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedWallet")
            .field("network", &self.network)
            .field("address", &self.address.as_str())
            .field("phrase", &self.phrase)
            .finish_non_exhaustive()
    }
}

/// The persistable public record of a wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetails {
    pub address: String,
    /// Compressed SEC1 hex.
    pub public_key: String,
    pub network: Network,
}

impl WalletDetails {
    pub(crate) fn new(address: &Address, public_key: &PublicKey, network: Network) -> Self {
        WalletDetails {
            address: address.to_string(),
            public_key: public_key.to_hex(),
            network,
        }
    }

    /// Parse the stored address.
    pub fn parsed_address(&self) -> Result<Address, WalletError> {
        Address::from_string(&self.address)
    }

    /// The same wallet rendered for another network.
    ///
    /// The address is re-rendered from the stored public key, so the record
    /// never pairs a network flag with another network's address.
    pub fn switch_network(&self, network: Network) -> Result<WalletDetails, WalletError> {
        let public_key = PublicKey::from_hex(&self.public_key)?;
        let address = Address::from_public_key(&public_key, network);
        Ok(WalletDetails::new(&address, &public_key, network))
    }

    /// Check that the stored address matches the stored key and network.
    pub fn is_consistent(&self) -> bool {
        match Address::from_public_key_hex(&self.public_key, self.network) {
            Ok(expected) => expected.as_str() == self.address,
            Err(_) => false,
        }
    }
}

/// Secrets of a freshly created wallet.
///
/// Returned to the immediate caller only; never persisted in plaintext.
/// Wiped on drop and redacted in `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct SecureWalletInfo {
    seed_phrase: String,
    private_key_wif: String,
}

impl SecureWalletInfo {
    pub fn new(seed_phrase: String, private_key_wif: String) -> Self {
        SecureWalletInfo {
            seed_phrase,
            private_key_wif,
        }
    }

    pub fn seed_phrase(&self) -> &str {
        &self.seed_phrase
    }

    pub fn private_key_wif(&self) -> &str {
        &self.private_key_wif
    }
}

impl fmt::Debug for SecureWalletInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureWalletInfo(redacted)")
    }
}
