/// Error types for transaction assembly and UTXO selection.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The caller supplied malformed input (negative amount, missing
    /// account, bad parameters). The caller must fix the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The selectable value cannot cover the requested amount plus fees.
    #[error("insufficient funds: need {needed}, available {available}")]
    InsufficientFunds {
        /// Decimal amount the operation required.
        needed: String,
        /// Decimal amount that was actually available.
        available: String,
    },

    /// A collaborator (the UTXO provider) failed; retrying is the
    /// caller's decision.
    #[error("utxo provider failure: {0}")]
    ProviderFailure(String),

    /// An underlying key or signature error (forwarded from
    /// `xchain-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] xchain_primitives::PrimitivesError),
}
