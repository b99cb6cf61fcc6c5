/// P2PKH address handling.
///
/// Renders `version || HASH160(compressed pubkey)` as Base58Check and parses
/// such strings back, detecting the network from the version byte. An
/// address can be re-validated from its string form alone.

use std::fmt;
use std::str::FromStr;

use keyring_primitives::base58;
use keyring_primitives::ec::PublicKey;
use keyring_primitives::PrimitivesError;
use serde::{Deserialize, Serialize};

use crate::network::Network;
use crate::WalletError;

/// Decoded length: version byte plus 20-byte hash.
const DECODED_LEN: usize = 21;

/// A P2PKH address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    /// The Base58Check address string.
    address_string: String,
    /// RIPEMD-160(SHA-256(compressed pubkey)).
    public_key_hash: [u8; 20],
    network: Network,
}

impl Address {
    /// Parse and validate a Base58Check address string.
    ///
    /// # Arguments
    /// * `addr` - The address string.
    ///
    /// # Returns
    /// The address with its network detected from the version byte, or
    /// `InvalidAddress` for a bad alphabet, checksum, length or version.
    pub fn from_string(addr: &str) -> Result<Self, WalletError> {
        let decoded = base58::check_decode(addr).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => {
                WalletError::InvalidAddress("checksum mismatch".to_string())
            }
            _ => WalletError::InvalidAddress("not a base58check string".to_string()),
        })?;

        if decoded.len() != DECODED_LEN {
            return Err(WalletError::InvalidAddress(format!(
                "decoded length {} is not {}",
                decoded.len(),
                DECODED_LEN
            )));
        }

        let network = Network::from_p2pkh_version(decoded[0]).ok_or_else(|| {
            WalletError::InvalidAddress(format!(
                "unsupported version byte 0x{:02x}",
                decoded[0]
            ))
        })?;

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&decoded[1..]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: pkh,
            network,
        })
    }

    /// Create an address from a 20-byte public key hash.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Self {
        let mut payload = Vec::with_capacity(DECODED_LEN);
        payload.push(network.p2pkh_version());
        payload.extend_from_slice(hash);

        Address {
            address_string: base58::check_encode(&payload),
            public_key_hash: *hash,
            network,
        }
    }

    /// Create an address from a public key (hashed in compressed form).
    pub fn from_public_key(public_key: &PublicKey, network: Network) -> Self {
        Self::from_public_key_hash(&public_key.hash160(), network)
    }

    /// Create an address from a hex-encoded SEC1 public key.
    ///
    /// Uncompressed keys are accepted and hashed in their compressed form,
    /// so both encodings of one key give the same address.
    pub fn from_public_key_hex(pub_key_hex: &str, network: Network) -> Result<Self, WalletError> {
        let public_key = PublicKey::from_hex(pub_key_hex)?;
        Ok(Self::from_public_key(&public_key, network))
    }

    /// The same public key hash rendered for another network.
    pub fn for_network(&self, network: Network) -> Self {
        Self::from_public_key_hash(&self.public_key_hash, network)
    }

    pub fn as_str(&self) -> &str {
        &self.address_string
    }

    pub fn public_key_hash(&self) -> &[u8; 20] {
        &self.public_key_hash
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

impl FromStr for Address {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Address {
    type Error = WalletError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> String {
        addr.address_string
    }
}
