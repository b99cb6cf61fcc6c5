//! Secret store: trait plus the in-memory implementation.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use keyring_primitives::ec::SymmetricKey;
use keyring_wallet::SecureWalletInfo;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::config::VaultConfig;
use crate::error::VaultError;

/// Opaque one-time identifier for a deposited secret.
///
/// A random UUIDv4; it carries no information about the secret and is safe
/// to log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultTicket(Uuid);

impl VaultTicket {
    fn new_random() -> Self {
        VaultTicket(Uuid::new_v4())
    }

    /// The ticket id as a UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for VaultTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VaultTicket {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(VaultTicket)
            .map_err(|e| VaultError::InvalidTicket(e.to_string()))
    }
}

/// Short-lived one-time storage for wallet secrets.
pub trait SecretStore: Send + Sync {
    /// Store `secret` and return the ticket that redeems it.
    fn deposit(&self, secret: &SecureWalletInfo) -> Result<VaultTicket, VaultError>;

    /// Take the secret for `ticket`, removing it from the store.
    ///
    /// The entry is removed on every outcome: a second redemption of the
    /// same ticket is always `NotFound`.
    fn redeem(&self, ticket: &VaultTicket) -> Result<SecureWalletInfo, VaultError>;

    /// Drop the entry for `ticket` unread. Returns whether one existed.
    fn revoke(&self, ticket: &VaultTicket) -> bool;

    /// Remove every expired entry and return how many were removed.
    fn purge_expired(&self) -> usize;

    /// Number of entries currently held, expired or not.
    fn len(&self) -> usize;

    /// True when no entries are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct SealedEntry {
    /// nonce || ciphertext || tag, bound to the ticket id.
    sealed: Vec<u8>,
    expires_at: Instant,
}

impl SealedEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-process [`SecretStore`].
///
/// Entries are sealed with AES-256-GCM under a key generated when the store
/// is created, with the ticket id as associated data, so the map never
/// holds a plaintext secret and a sealed blob cannot be replayed under
/// another ticket. The key lives only as long as the store.
pub struct InMemorySecretStore {
    key: SymmetricKey,
    ttl: Duration,
    entries: RwLock<HashMap<VaultTicket, SealedEntry>>,
}

impl InMemorySecretStore {
    /// Create an empty store with a fresh random key.
    ///
    /// # Returns
    /// `Crypto` if the OS random source cannot supply the key.
    pub fn new(config: VaultConfig) -> Result<Self, VaultError> {
        Ok(Self {
            key: SymmetricKey::new_random()?,
            ttl: config.ttl,
            entries: RwLock::new(HashMap::new()),
        })
    }

    /// Time-to-live applied to new deposits.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for InMemorySecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySecretStore")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

impl SecretStore for InMemorySecretStore {
    fn deposit(&self, secret: &SecureWalletInfo) -> Result<VaultTicket, VaultError> {
        let plaintext = Zeroizing::new(serde_json::to_vec(secret)?);
        let ticket = VaultTicket::new_random();
        let sealed = self.key.seal(&plaintext, ticket.0.as_bytes())?;
        let expires_at = Instant::now() + self.ttl;

        // Entries are independent, so a poisoned lock is still consistent.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(ticket, SealedEntry { sealed, expires_at });
        debug!(ticket = %ticket, ttl_secs = self.ttl.as_secs(), "deposited wallet secret");
        Ok(ticket)
    }

    fn redeem(&self, ticket: &VaultTicket) -> Result<SecureWalletInfo, VaultError> {
        let entry = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.remove(ticket)
        };
        let entry = match entry {
            Some(entry) => entry,
            None => {
                debug!(ticket = %ticket, "redeem of unknown ticket");
                return Err(VaultError::NotFound);
            }
        };
        if entry.is_expired(Instant::now()) {
            debug!(ticket = %ticket, "redeem of expired ticket");
            return Err(VaultError::Expired);
        }

        let plaintext = Zeroizing::new(self.key.open(&entry.sealed, ticket.0.as_bytes())?);
        let secret = serde_json::from_slice(&plaintext)?;
        debug!(ticket = %ticket, "redeemed wallet secret");
        Ok(secret)
    }

    fn revoke(&self, ticket: &VaultTicket) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.remove(ticket).is_some();
        if removed {
            debug!(ticket = %ticket, "revoked wallet secret");
        }
        removed
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before - entries.len();
        if purged > 0 {
            debug!(purged, remaining = entries.len(), "purged expired wallet secrets");
        }
        purged
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
