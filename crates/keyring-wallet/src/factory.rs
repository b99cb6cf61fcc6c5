//! Injectable wallet construction.

use tracing::debug;

use crate::config::WalletConfig;
use crate::derivation;
use crate::key_pair::KeyPair;
use crate::network::Network;
use crate::wallet::{DerivedWallet, WalletDetails};
use crate::WalletError;

/// Creates, recovers and imports wallets using one [`WalletConfig`].
///
/// Construct one per configuration and pass it to whatever handles wallet
/// requests; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct WalletFactory {
    config: WalletConfig,
}

impl WalletFactory {
    pub fn new(config: WalletConfig) -> Self {
        WalletFactory { config }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Generate a new wallet on the default network.
    pub fn create_wallet(&self) -> Result<DerivedWallet, WalletError> {
        self.create_wallet_on(self.config.default_network)
    }

    /// Generate a new wallet on `network`.
    pub fn create_wallet_on(&self, network: Network) -> Result<DerivedWallet, WalletError> {
        let wallet = derivation::generate_key_pair_with(self.config.entropy, network)?;
        debug!(
            network = %network,
            address = %wallet.address(),
            words = wallet.phrase().word_count(),
            "generated wallet"
        );
        Ok(wallet)
    }

    /// Recover a wallet on the default network.
    pub fn recover_wallet(&self, phrase: &str) -> Result<DerivedWallet, WalletError> {
        self.recover_wallet_on(phrase, self.config.default_network)
    }

    pub fn recover_wallet_on(
        &self,
        phrase: &str,
        network: Network,
    ) -> Result<DerivedWallet, WalletError> {
        let wallet = derivation::recover_key_pair(phrase, network)?;
        debug!(network = %network, address = %wallet.address(), "recovered wallet");
        Ok(wallet)
    }

    /// Import a private key given as 64 hex digits or WIF.
    ///
    /// Input that is 64 characters of hex is read as hex; anything else is
    /// read as WIF.
    pub fn import_private_key(
        &self,
        encoded: &str,
    ) -> Result<(KeyPair, WalletDetails), WalletError> {
        let encoded = encoded.trim();
        let key_pair = if encoded.len() == 64 && encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
            derivation::from_hex(encoded)?
        } else {
            derivation::from_wif(encoded)?
        };
        let details = key_pair.details(self.config.default_network);
        debug!(
            network = %details.network,
            address = %details.address,
            "imported private key"
        );
        Ok((key_pair, details))
    }
}
