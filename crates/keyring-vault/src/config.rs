//! Vault configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default lifetime of a deposited secret.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Configuration for an [`InMemorySecretStore`](crate::InMemorySecretStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// How long a deposited secret stays redeemable, in whole seconds when
    /// deserialized.
    #[serde(with = "duration_secs")]
    pub ttl: Duration,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_five_minutes() {
        assert_eq!(VaultConfig::default().ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_deserialize_seconds() {
        let config: VaultConfig = serde_json::from_str(r#"{"ttl":90}"#).unwrap();
        assert_eq!(config.ttl, Duration::from_secs(90));
        let config: VaultConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VaultConfig::default());
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"ttl":300}"#);
    }
}
