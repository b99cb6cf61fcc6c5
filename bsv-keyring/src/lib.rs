#![deny(missing_docs)]

//! bsv-keyring - Deterministic BSV wallet keys.
//!
//! Re-exports all bsv-keyring components for convenient single-crate usage.

pub use keyring_primitives as primitives;
pub use keyring_wallet as wallet;
pub use keyring_vault as vault;
pub use keyring_faucet as faucet;
