#![deny(missing_docs)]

//! # keyring-vault
//!
//! One-time, expiring, encrypted hand-off for wallet secrets.
//!
//! A freshly generated recovery phrase and WIF must reach the user exactly
//! once. Rather than carrying them across a request boundary in a cookie or
//! query string, the creating handler deposits them here and passes on only
//! an opaque [`VaultTicket`]. The displaying handler redeems the ticket,
//! which removes the entry whether or not it is still live.
//!
//! # Example
//!
//! ```no_run
//! use keyring_vault::{InMemorySecretStore, SecretStore, VaultConfig};
//! use keyring_wallet::{generate_key_pair, Network};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemorySecretStore::new(VaultConfig::default())?;
//! let (details, secrets) = generate_key_pair(Network::Testnet)?.into_parts();
//!
//! let ticket = store.deposit(&secrets)?;
//! // persist `details`, hand `ticket` to the next request ...
//!
//! let secrets = store.redeem(&ticket)?;
//! assert!(store.redeem(&ticket).is_err());
//! # let _ = (details, secrets);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod store;

pub use config::VaultConfig;
pub use error::VaultError;
pub use store::{InMemorySecretStore, SecretStore, VaultTicket};
