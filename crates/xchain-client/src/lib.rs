//! XChain SDK - Client context.
//!
//! Ties the transaction engine to its collaborators: a key loader for
//! account material, a UTXO provider for spendable outputs, and a
//! submission sink that carries finalized transactions to the ledger.
//! There is no process-wide state; every operation goes through an
//! explicit [`XChainClient`] instance.

pub mod account;
pub mod client;
pub mod contract;
pub mod submit;

mod error;
pub use account::{DirKeyLoader, KeyLoader};
pub use client::XChainClient;
pub use contract::{ContractResponse, InvokeOutcome, VmType};
pub use error::ClientError;
pub use submit::{SubmitFailure, SubmitSuccess, TransactionSink};

#[cfg(test)]
mod tests;
