#![deny(missing_docs)]

//! # keyring-faucet
//!
//! Async client for funding and watching testnet wallets: requests coins
//! from the WitnessOnChain faucet, reads balances and polls for transactions
//! on the WhatsOnChain testnet explorer.
//!
//! # Example
//!
//! ```no_run
//! use keyring_faucet::{FaucetClient, FaucetConfig};
//! use keyring_wallet::{generate_key_pair, Network};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FaucetClient::new(FaucetConfig::default());
//! let wallet = generate_key_pair(Network::Testnet)?;
//!
//! let resp = client.request_coins(wallet.address()).await?;
//! if client.wait_for_transaction(&resp.txid).await {
//!     let sats = client.address_balance(wallet.address()).await?;
//!     println!("balance: {} sats", sats);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::FaucetClient;
pub use error::FaucetError;
pub use types::{Balance, FaucetConfig, FaucetResponse};
