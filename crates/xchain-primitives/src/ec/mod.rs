//! Elliptic curve cryptography on the ledger's fixed curve (NIST P-256).

pub mod private_key;
pub mod public_key;
pub mod signature;

mod keyfile;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;

/// Name of the fixed curve as it appears in the ledger's key files.
pub const CURVE_NAME: &str = "P-256";
