use keyring_primitives::mnemonic::EntropyStrength;
use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Configuration for a [`WalletFactory`](crate::WalletFactory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletConfig {
    /// Network new and recovered wallets are rendered for (testnet unless set).
    pub default_network: Network,
    /// Entropy of generated phrases, as a bit count (256 unless set).
    pub entropy: EntropyStrength,
}
