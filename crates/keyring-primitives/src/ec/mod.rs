/// Elliptic curve keys on secp256k1, plus the AES-GCM key used to seal
/// secrets in transit.

pub mod private_key;
pub mod public_key;
pub mod symmetric;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use symmetric::SymmetricKey;
