//! UTXO selection against an external provider.
//!
//! Discovery and locking of spendable outputs belong to the provider (a
//! node query in production, an in-memory table in tests). The allocator
//! here only does the bookkeeping the assembler relies on: no output is
//! counted twice and the selected total covers the requested amount.
//! Selections are fetched fresh per assembly call and never cached; a
//! spendable output is invalidated the moment it is spent.

use std::collections::HashSet;

use log::warn;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::amount;
use crate::TransactionError;

/// One spendable output, as reported by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendableOutput {
    /// Transaction id the output belongs to.
    pub ref_txid: Vec<u8>,
    /// Offset of the output within that transaction.
    pub ref_offset: i32,
    /// Address that owns the output.
    pub to_addr: Vec<u8>,
    /// Amount, in wire form (big-endian magnitude).
    pub amount: Vec<u8>,
    /// Height until which the output is frozen, 0 if unfrozen.
    pub frozen_height: i64,
}

/// The outcome of a selection: the chosen outputs and their total value.
#[derive(Clone, Debug, Default)]
pub struct UtxoSelection {
    /// The selected outputs.
    pub outputs: Vec<SpendableOutput>,
    /// Sum of the selected outputs' amounts.
    pub total_selected: BigInt,
}

/// Failure reported by a UTXO provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider cannot assemble enough spendable value.
    #[error("spendable outputs cannot cover the requested amount")]
    InsufficientFunds,
    /// Any other provider-side failure.
    #[error("{0}")]
    Failure(String),
}

/// External source of spendable outputs.
///
/// Locking the returned outputs against concurrent spends is the
/// provider's responsibility.
pub trait UtxoProvider {
    /// Return spendable outputs for `address` totalling at least
    /// `min_amount`.
    fn provide(&self, address: &str, min_amount: &BigInt)
        -> Result<UtxoSelection, ProviderError>;
}

/// Select spendable inputs worth at least `required` for `address`.
///
/// Delegates discovery to the provider, then enforces the allocator's own
/// guarantees: every `(ref_txid, ref_offset)` pair appears at most once,
/// and the recomputed total covers `required`.
///
/// # Returns
/// The validated selection with its recomputed total, or:
/// * `InsufficientFunds` when the provider cannot cover `required`,
/// * `ProviderFailure` for any other provider failure, including a
///   selection that references the same output twice.
pub fn select(
    provider: &dyn UtxoProvider,
    address: &str,
    required: &BigInt,
) -> Result<UtxoSelection, TransactionError> {
    let selection = provider.provide(address, required).map_err(|e| match e {
        ProviderError::InsufficientFunds => {
            warn!("utxo select for {}: provider reports insufficient funds", address);
            TransactionError::InsufficientFunds {
                needed: required.to_string(),
                available: "unknown".to_string(),
            }
        }
        ProviderError::Failure(msg) => TransactionError::ProviderFailure(msg),
    })?;

    let mut seen = HashSet::new();
    let mut total = BigInt::from(0u8);
    for output in &selection.outputs {
        if !seen.insert((output.ref_txid.clone(), output.ref_offset)) {
            return Err(TransactionError::ProviderFailure(format!(
                "output {}:{} selected twice",
                hex::encode(&output.ref_txid),
                output.ref_offset
            )));
        }
        total += amount::from_bytes(&output.amount);
    }

    if &total < required {
        warn!(
            "utxo select for {}: selected {} below required {}",
            address, total, required
        );
        return Err(TransactionError::InsufficientFunds {
            needed: required.to_string(),
            available: total.to_string(),
        });
    }

    Ok(UtxoSelection {
        outputs: selection.outputs,
        total_selected: total,
    })
}
