//! Key pairs and their external renderings.
//!
//! A [`KeyPair`] owns one private scalar and its public point. Rendering
//! for a network produces [`KeyMaterial`], the serializable view that
//! carries every representation callers display or persist:
//!
//! ```text
//! { "privateKey": { "hex", "wif", "binary" },
//!   "publicKey":  { "hex", "address", "der" } }
//! ```

use std::fmt;

use keyring_primitives::ec::{PrivateKey, PublicKey};
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::Address;
use crate::network::Network;
use crate::wallet::WalletDetails;

/// A secp256k1 private key and its public key.
#[derive(Clone, PartialEq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Pair `private_key` with its derived public key.
    pub fn new(private_key: PrivateKey) -> Self {
        let public_key = private_key.pub_key();
        KeyPair {
            private_key,
            public_key,
        }
    }

    /// The private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Lowercase 64-character hex of the scalar.
    pub fn private_key_hex(&self) -> String {
        self.private_key.to_hex()
    }

    /// Compressed mainnet-version WIF.
    pub fn private_key_wif(&self) -> String {
        self.private_key.to_wif()
    }

    /// 66-character compressed SEC1 hex.
    pub fn public_key_hex(&self) -> String {
        self.public_key.to_hex()
    }

    /// P2PKH address of the public key on `network`.
    pub fn address(&self, network: Network) -> Address {
        Address::from_public_key(&self.public_key, network)
    }

    /// The persistable public record for this key on `network`.
    pub fn details(&self, network: Network) -> WalletDetails {
        WalletDetails::new(&self.address(network), &self.public_key, network)
    }

    /// Render every representation of both keys for `network`.
    pub fn render(&self, network: Network) -> KeyMaterial {
        KeyMaterial {
            private_key: PrivateKeyMaterial {
                hex: self.private_key.to_hex(),
                wif: self.private_key.to_wif(),
                binary: self.private_key.to_bytes().to_vec(),
            },
            public_key: PublicKeyMaterial {
                hex: self.public_key.to_hex(),
                address: self.address(network).to_string(),
                der: self.public_key.to_der_hex(),
            },
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key.to_hex())
            .finish_non_exhaustive()
    }
}

/// All renderings of a key pair for one network.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMaterial {
    pub private_key: PrivateKeyMaterial,
    pub public_key: PublicKeyMaterial,
}

/// Secret renderings of the private key. Wiped on drop.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyMaterial {
    pub hex: String,
    pub wif: String,
    /// Raw 32-byte big-endian scalar.
    pub binary: Vec<u8>,
}

impl fmt::Debug for PrivateKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyMaterial(redacted)")
    }
}

/// Public renderings of the public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicKeyMaterial {
    /// Compressed SEC1 hex.
    pub hex: String,
    pub address: String,
    /// DER hex; identical to the compressed SEC1 hex for these keys.
    pub der: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_KEY_HEX: &str =
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1";

    fn abandon_pair() -> KeyPair {
        KeyPair::new(PrivateKey::from_hex(ABANDON_KEY_HEX).unwrap())
    }

    #[test]
    fn test_render_testnet() {
        let material = abandon_pair().render(Network::Testnet);
        assert_eq!(material.private_key.hex, ABANDON_KEY_HEX);
        assert_eq!(
            material.private_key.wif,
            "KzPmh6XnD57tLQ7pwjPA3VcqiJd5GxEvLqJiEGLUyeuFnL1HH9LG"
        );
        assert_eq!(hex::encode(&material.private_key.binary), ABANDON_KEY_HEX);
        assert_eq!(
            material.public_key.hex,
            "029058af2e7b6f0dc54d96925b80868515bf87f3158e95afce81927b3b772d5b24"
        );
        assert_eq!(material.public_key.der, material.public_key.hex);
        assert_eq!(
            material.public_key.address,
            "mxQXvGavKwj7i2h9jUVpkrfP8HhaMuaHHK"
        );
    }

    #[test]
    fn test_render_mainnet_changes_only_address() {
        let pair = abandon_pair();
        let test = pair.render(Network::Testnet);
        let main = pair.render(Network::Mainnet);
        assert_eq!(main.public_key.address, "1HtadDVwWvHrvvDY1uXSvwT4GJ6sTCAgLH");
        assert_eq!(main.private_key.wif, test.private_key.wif);
        assert_eq!(main.public_key.hex, test.public_key.hex);
    }

    #[test]
    fn test_render_serializes_camel_case() {
        let json = serde_json::to_value(abandon_pair().render(Network::Testnet)).unwrap();
        assert!(json["privateKey"]["hex"].is_string());
        assert!(json["privateKey"]["wif"].is_string());
        assert_eq!(json["privateKey"]["binary"].as_array().unwrap().len(), 32);
        assert!(json["publicKey"]["hex"].is_string());
        assert!(json["publicKey"]["address"].is_string());
        assert!(json["publicKey"]["der"].is_string());
    }

    #[test]
    fn test_debug_is_redacted() {
        let pair = abandon_pair();
        assert!(!format!("{:?}", pair).contains(ABANDON_KEY_HEX));
        let material = pair.render(Network::Testnet);
        let debug = format!("{:?}", material);
        assert!(!debug.contains(ABANDON_KEY_HEX));
        assert!(!debug.contains(&material.private_key.wif));
    }
}
