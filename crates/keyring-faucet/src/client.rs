//! Faucet and explorer HTTP client.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use keyring_wallet::Address;

use crate::error::FaucetError;
use crate::types::{Balance, FaucetConfig, FaucetRequest, FaucetResponse, TransactionStatus};

/// HTTP client for the testnet faucet and explorer.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    /// Client configuration.
    config: FaucetConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl FaucetClient {
    /// Create a new faucet client with the given configuration.
    pub fn new(config: FaucetConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// The client configuration.
    pub fn config(&self) -> &FaucetConfig {
        &self.config
    }

    /// Ask the faucet to send testnet coins to `address`.
    ///
    /// Mainnet addresses are rejected before any request is made.
    pub async fn request_coins(&self, address: &Address) -> Result<FaucetResponse, FaucetError> {
        if address.network().is_mainnet() {
            return Err(FaucetError::MainnetAddress);
        }

        let url = format!("{}/faucet/tbsv", self.config.faucet_url);
        let body = FaucetRequest {
            address: address.as_str(),
            channel: &self.config.channel,
        };
        debug!(address = %address, channel = %self.config.channel, "requesting testnet coins");

        let resp = self.client.post(&url).json(&body).send().await?;
        let parsed: FaucetResponse = Self::read_json(resp).await?;
        debug!(address = %address, txid = %parsed.txid, code = parsed.code, "faucet replied");
        Ok(parsed)
    }

    /// Confirmed plus unconfirmed balance of `address`, in satoshis.
    ///
    /// # Returns
    /// `InvalidBalance` if the two parts do not sum to an `i64`.
    pub async fn address_balance(&self, address: &Address) -> Result<i64, FaucetError> {
        let balance = self.balance(address).await?;
        balance.total().ok_or_else(|| {
            warn!(address = %address, "explorer balance overflows");
            FaucetError::InvalidBalance
        })
    }

    /// Balance of `address` split into confirmed and unconfirmed parts.
    pub async fn balance(&self, address: &Address) -> Result<Balance, FaucetError> {
        let path = format!("address/{}/balance", address.as_str());
        self.explorer_get(&path).await
    }

    /// Poll the explorer until it knows `txid`.
    ///
    /// Checks up to `poll_attempts` times, `poll_interval` apart. A 404 means
    /// "not yet"; any other failure is logged and the poll continues.
    /// Returns `false` once the attempts run out.
    pub async fn wait_for_transaction(&self, txid: &str) -> bool {
        let path = format!("tx/hash/{}", txid);

        for attempt in 1..=self.config.poll_attempts {
            match self.explorer_get::<TransactionStatus>(&path).await {
                Ok(status) if status.txid.is_some() => {
                    debug!(txid, attempt, "transaction visible on explorer");
                    return true;
                }
                Ok(_) | Err(FaucetError::NotFound) => {
                    debug!(txid, attempt, "transaction not yet visible");
                }
                Err(e) => {
                    warn!(txid, attempt, error = %e, "error checking transaction");
                }
            }

            if attempt < self.config.poll_attempts {
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }

        debug!(txid, attempts = self.config.poll_attempts, "gave up waiting for transaction");
        false
    }

    /// Perform a GET request against the explorer and deserialize the response.
    async fn explorer_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FaucetError> {
        let url = format!("{}/{}", self.config.explorer_url, path);
        let resp = self.client.get(&url).send().await?;
        Self::read_json(resp).await
    }

    /// Map the status code and deserialize a successful body.
    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, FaucetError> {
        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(FaucetError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(FaucetError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}
