#![deny(missing_docs)]

//! XChain SDK - Complete SDK.
//!
//! Re-exports all XChain SDK components for convenient single-crate usage.

pub use xchain_client as client;
pub use xchain_primitives as primitives;
pub use xchain_transaction as transaction;
