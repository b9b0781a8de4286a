//! Transaction submission interfaces.
//!
//! Carrying a finalized transaction to a ledger node is a transport
//! concern; this module only defines the seam.

use xchain_transaction::Transaction;

/// Result of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmitSuccess {
    /// The transaction id acknowledged by the ledger, lowercase hex.
    pub txid: String,
}

/// Result of a rejected submission.
#[derive(Debug, Clone)]
pub struct SubmitFailure {
    /// Machine-readable rejection code.
    pub code: String,
    /// Human-readable description of the rejection.
    pub description: String,
}

impl std::fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for SubmitFailure {}

/// Trait for handing finalized transactions to the ledger.
pub trait TransactionSink {
    /// Submit a transaction.
    ///
    /// # Returns
    /// `Ok(SubmitSuccess)` when the ledger accepted it, or `Err` with the
    /// rejection.
    fn submit(&self, tx: &Transaction) -> Result<SubmitSuccess, SubmitFailure>;
}
