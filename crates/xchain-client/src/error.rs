/// Error types for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The caller supplied malformed input; fix the request and retry.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An assembly or UTXO selection error (forwarded from
    /// `xchain-transaction`).
    #[error("transaction error: {0}")]
    Transaction(#[from] xchain_transaction::TransactionError),

    /// A key or signature error (forwarded from `xchain-primitives`).
    #[error("key error: {0}")]
    Key(#[from] xchain_primitives::PrimitivesError),

    /// A contract pre-execution reported a failing status; the
    /// transaction was not assembled.
    #[error("contract execution failed with status {status}: {message}")]
    ContractFailed {
        /// Status code reported by the contract runtime (>= 400).
        status: i32,
        /// Message reported alongside the status.
        message: String,
    },

    /// The submission sink rejected the transaction.
    #[error("transaction rejected ({code}): {description}")]
    Rejected {
        /// Machine-readable rejection code.
        code: String,
        /// Human-readable description.
        description: String,
    },

    /// An I/O error while loading key material.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
