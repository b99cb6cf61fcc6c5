//! Types for the faucet and explorer APIs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a [`FaucetClient`](crate::FaucetClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaucetConfig {
    /// Base URL of the faucet API.
    pub faucet_url: String,
    /// Base URL of the testnet explorer API.
    pub explorer_url: String,
    /// Channel name sent with every faucet request.
    pub channel: String,
    /// How many times [`wait_for_transaction`](crate::FaucetClient::wait_for_transaction)
    /// checks the explorer.
    pub poll_attempts: u32,
    /// Delay between checks, in whole seconds when deserialized.
    #[serde(with = "duration_secs")]
    pub poll_interval: Duration,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            faucet_url: "https://witnessonchain.com/v1".to_string(),
            explorer_url: "https://api.whatsonchain.com/v1/bsv/test".to_string(),
            channel: "bsv-ai-wallet".to_string(),
            poll_attempts: 10,
            poll_interval: Duration::from_secs(5),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

/// Body of a faucet request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FaucetRequest<'a> {
    pub address: &'a str,
    pub channel: &'a str,
}

/// Faucet reply to a coin request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetResponse {
    /// Faucet status code.
    #[serde(default)]
    pub code: i64,
    /// Human-readable status.
    #[serde(default)]
    pub message: String,
    /// Raw funding transaction (hex).
    #[serde(default)]
    pub raw: String,
    /// Funding transaction ID.
    #[serde(default)]
    pub txid: String,
}

/// Address balance in satoshis as reported by the explorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Confirmed satoshis.
    #[serde(default)]
    pub confirmed: i64,
    /// Unconfirmed satoshis; negative while a spend is pending.
    #[serde(default)]
    pub unconfirmed: i64,
}

impl Balance {
    /// Confirmed plus unconfirmed satoshis, or `None` if the sum overflows.
    pub fn total(&self) -> Option<i64> {
        self.confirmed.checked_add(self.unconfirmed)
    }
}

/// The part of an explorer transaction record the poller looks at.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TransactionStatus {
    #[serde(default)]
    pub txid: Option<String>,
}
