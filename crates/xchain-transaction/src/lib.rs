//! XChain SDK - Transaction building, canonical digests, and signing.
//!
//! Provides the ledger's transaction data model, the canonical digest
//! encoder that every validating node reproduces bit-for-bit, UTXO
//! selection bookkeeping, and the assembler that turns caller intent into
//! a finalized signed transaction.

pub mod amount;
pub mod assembler;
pub mod digest;
pub mod input;
pub mod invoke;
pub mod output;
pub mod transaction;
pub mod utxo;

mod error;
pub use error::TransactionError;
pub use input::{TxInput, TxInputExt};
pub use invoke::{ContractResult, InvokeRequest, ResourceLimit, ResourceType};
pub use output::{TxOutput, TxOutputExt};
pub use transaction::{SignatureInfo, Transaction};
pub use utxo::{ProviderError, SpendableOutput, UtxoProvider, UtxoSelection};
