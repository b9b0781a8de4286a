//! XChain SDK - Cryptographic primitives.
//!
//! This crate provides the foundational building blocks for the XChain SDK:
//! - Hash functions (SHA-256, double SHA-256)
//! - Elliptic curve cryptography (NIST P-256 keys, ECDSA signatures)
//! - The DER signature envelope used by the ledger's wire convention

pub mod account;
pub mod ec;
pub mod hash;

mod error;
pub use account::Account;
pub use error::PrimitivesError;
