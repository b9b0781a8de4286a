//! Transaction assembler.
//!
//! Turns caller intent (a value transfer, a contract invocation, or both)
//! into a finalized signed transaction. Assembly is all-or-nothing: every
//! failure path returns before a `Transaction` exists.

use log::warn;
use num_bigint::BigInt;
use num_traits::Zero;

use xchain_primitives::Account;

use crate::amount;
use crate::digest;
use crate::input::TxInput;
use crate::invoke::ContractResult;
use crate::output::TxOutput;
use crate::transaction::{SignatureInfo, Transaction};
use crate::utxo::UtxoSelection;
use crate::TransactionError;

/// Reserved address that collects contract resource fees.
pub const FEE_ADDRESS: &str = "$";

/// Transaction format version emitted by this assembler.
pub const TX_VERSION: i32 = 1;

/// Assemble, sign, and finalize a transaction.
///
/// Steps, in order:
/// 1. Reject a negative `amount` (`InvalidRequest`).
/// 2. Turn the UTXO selection (if any) into inputs; the selected total
///    becomes the running `remaining` balance.
/// 3. Emit the transfer output to `to` when `amount > 0` and a recipient
///    is given; `InsufficientFunds` when `amount` exceeds `remaining`.
/// 4. Emit the fee output to [`FEE_ADDRESS`] when the contract result
///    reports a positive cost; `InsufficientFunds` when the cost exceeds
///    what is left.
/// 5. Return any remainder to the initiator as a change output.
/// 6. Copy the contract result's read set, write set, and invocation
///    requests verbatim.
/// 7. Fill descriptive fields; version is fixed at [`TX_VERSION`].
/// 8. Sign the pre-signature digest and attach the DER-wrapped signature
///    as the sole initiator signature; when `auth_require` is non-empty
///    the same signature is duplicated as the sole authorization
///    signature. True multi-party co-signing is not supported by this
///    assembler.
/// 9. Compute the transaction id over the signed encoding.
///
/// `nonce` and `timestamp` are taken as parameters so a rebuild with
/// identical inputs is byte-identical; the client layer generates them.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    utxo: Option<UtxoSelection>,
    account: &Account,
    auth_require: &[String],
    to: &str,
    amount: &BigInt,
    contract: Option<&ContractResult>,
    desc: &str,
    nonce: &str,
    timestamp: i64,
) -> Result<Transaction, TransactionError> {
    if amount.sign() == num_bigint::Sign::Minus {
        return Err(TransactionError::InvalidRequest(format!(
            "negative transfer amount {}",
            amount
        )));
    }

    let mut tx = Transaction::default();
    let mut remaining = BigInt::zero();

    if let Some(selection) = utxo {
        for output in &selection.outputs {
            tx.tx_inputs.push(TxInput {
                ref_txid: output.ref_txid.clone(),
                ref_offset: output.ref_offset,
                from_addr: output.to_addr.clone(),
                amount: output.amount.clone(),
                frozen_height: output.frozen_height,
            });
        }
        remaining = selection.total_selected;
    }

    if !amount.is_zero() && !to.is_empty() {
        if amount > &remaining {
            warn!(
                "assemble: transfer amount {} exceeds selected {}",
                amount, remaining
            );
            return Err(TransactionError::InsufficientFunds {
                needed: amount.to_string(),
                available: remaining.to_string(),
            });
        }
        tx.tx_outputs.push(TxOutput {
            amount: amount::to_bytes(amount)?,
            to_addr: to.as_bytes().to_vec(),
            frozen_height: 0,
        });
        remaining -= amount;
    }

    if let Some(result) = contract {
        if result.gas_used > 0 {
            let fee = BigInt::from(result.gas_used);
            if fee > remaining {
                warn!(
                    "assemble: contract fee {} exceeds remaining {}",
                    fee, remaining
                );
                return Err(TransactionError::InsufficientFunds {
                    needed: fee.to_string(),
                    available: remaining.to_string(),
                });
            }
            tx.tx_outputs.push(TxOutput {
                amount: amount::to_bytes(&fee)?,
                to_addr: FEE_ADDRESS.as_bytes().to_vec(),
                frozen_height: 0,
            });
            remaining -= fee;
        }
    }

    if remaining > BigInt::zero() {
        tx.tx_outputs.push(TxOutput {
            amount: amount::to_bytes(&remaining)?,
            to_addr: account.address.as_bytes().to_vec(),
            frozen_height: 0,
        });
    }

    if let Some(result) = contract {
        tx.tx_inputs_ext = result.inputs.clone();
        tx.tx_outputs_ext = result.outputs.clone();
        tx.contract_requests = result.requests.clone();
    }

    tx.desc = desc.as_bytes().to_vec();
    tx.nonce = nonce.to_string();
    tx.timestamp = timestamp;
    tx.version = TX_VERSION;
    tx.coinbase = false;
    tx.autogen = false;
    tx.initiator = account.address.clone();
    tx.auth_require = auth_require.to_vec();

    let digest = digest::digest_for_signing(&tx);
    let sign = account.private_key.sign(&digest)?.to_der();
    let info = SignatureInfo {
        public_key: account.public_key.to_json().to_string(),
        sign,
    };
    tx.initiator_signs = vec![info.clone()];
    if !tx.auth_require.is_empty() {
        tx.auth_require_signs = vec![info];
    }

    tx.txid = digest::transaction_id(&tx).to_vec();
    Ok(tx)
}
