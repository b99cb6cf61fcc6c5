//! Network selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::WalletError;

/// Mainnet P2PKH address version byte.
pub const MAINNET_P2PKH: u8 = 0x00;
/// Testnet P2PKH address version byte.
pub const TESTNET_P2PKH: u8 = 0x6f;

/// BSV network a wallet's address is rendered for.
///
/// Only the address version byte depends on the network; keys are the same
/// on both. Testnet is the default so an unconfigured caller never hands out
/// a mainnet address by accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Test network (address prefix 0x6f, starts with 'm' or 'n').
    #[default]
    #[serde(alias = "test")]
    Testnet,
    /// Main network (address prefix 0x00, starts with '1').
    #[serde(alias = "main")]
    Mainnet,
}

impl Network {
    /// The P2PKH address version byte for this network.
    pub fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet => TESTNET_P2PKH,
        }
    }

    /// Look up the network an address version byte belongs to.
    pub fn from_p2pkh_version(version: u8) -> Option<Self> {
        match version {
            MAINNET_P2PKH => Some(Network::Mainnet),
            TESTNET_P2PKH => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    pub fn is_mainnet(self) -> bool {
        self == Network::Mainnet
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    /// Accepts `test`, `testnet`, `main` and `mainnet` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" | "testnet" => Ok(Network::Testnet),
            "main" | "mainnet" => Ok(Network::Mainnet),
            _ => Err(WalletError::UnknownNetwork(s.to_string())),
        }
    }
}
