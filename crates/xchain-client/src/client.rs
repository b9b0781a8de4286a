//! The client context.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use num_bigint::BigInt;
use num_traits::Zero;
use rand::Rng;

use xchain_primitives::Account;
use xchain_transaction::assembler::assemble;
use xchain_transaction::utxo::{self, UtxoSelection};
use xchain_transaction::{Transaction, UtxoProvider};

use crate::contract::InvokeOutcome;
use crate::submit::TransactionSink;
use crate::ClientError;

/// Client context binding one account to its collaborators.
///
/// Holds no process-wide state; independent clients over disjoint UTXO
/// sets may build transactions in parallel. Keeping concurrent selections
/// disjoint is the provider's locking responsibility.
pub struct XChainClient<P, S> {
    account: Account,
    provider: P,
    sink: S,
}

impl<P: UtxoProvider, S: TransactionSink> XChainClient<P, S> {
    /// Create a client for `account` using the given collaborators.
    pub fn new(account: Account, provider: P, sink: S) -> Self {
        XChainClient {
            account,
            provider,
            sink,
        }
    }

    /// The account this client signs with.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Build a signed value transfer of `amount` to `to`.
    ///
    /// Selects spendable outputs through the provider, assembles the
    /// input/output/change structure, signs, and finalizes the id. The
    /// transaction is returned without being submitted.
    ///
    /// # Arguments
    /// * `to` - Recipient address.
    /// * `amount` - Amount to transfer; must be non-negative.
    /// * `desc` - Free-form description attached to the transaction.
    pub fn build_transfer(
        &self,
        to: &str,
        amount: &BigInt,
        desc: &str,
    ) -> Result<Transaction, ClientError> {
        if to.is_empty() {
            return Err(ClientError::InvalidRequest(
                "recipient address is empty".to_string(),
            ));
        }
        if amount.sign() == num_bigint::Sign::Minus {
            return Err(ClientError::InvalidRequest(format!(
                "negative transfer amount {}",
                amount
            )));
        }

        let selection = utxo::select(&self.provider, &self.account.address, amount)?;
        debug!(
            "transfer: selected {} across {} outputs",
            selection.total_selected,
            selection.outputs.len()
        );

        let tx = assemble(
            Some(selection),
            &self.account,
            &[],
            to,
            amount,
            None,
            desc,
            &gen_nonce(),
            now_timestamp(),
        )?;
        Ok(tx)
    }

    /// Select spendable outputs of this account worth at least
    /// `min_amount`, e.g. to cover a contract invocation's resource cost.
    pub fn select_utxo(&self, min_amount: &BigInt) -> Result<UtxoSelection, ClientError> {
        Ok(utxo::select(
            &self.provider,
            &self.account.address,
            min_amount,
        )?)
    }

    /// Build a signed contract invocation from a pre-execution outcome.
    ///
    /// Fails with `ContractFailed` when any response in the outcome
    /// reports a failing status; no transaction is assembled in that case.
    /// The UTXO selection (covering the resource cost) is supplied by the
    /// caller, who obtained it together with the pre-execution.
    ///
    /// # Arguments
    /// * `utxo` - Selection covering the invocation's resource cost, if any.
    /// * `outcome` - The contract pre-execution outcome.
    /// * `auth_require` - Additional addresses whose authorization the
    ///   invocation requires.
    /// * `desc` - Free-form description attached to the transaction.
    pub fn build_contract_invocation(
        &self,
        utxo: Option<UtxoSelection>,
        outcome: &InvokeOutcome,
        auth_require: &[String],
        desc: &str,
    ) -> Result<Transaction, ClientError> {
        outcome.ensure_success()?;

        let tx = assemble(
            utxo,
            &self.account,
            auth_require,
            "",
            &BigInt::zero(),
            Some(&outcome.result),
            desc,
            &gen_nonce(),
            now_timestamp(),
        )?;
        Ok(tx)
    }

    /// Submit a finalized transaction through the sink.
    ///
    /// # Returns
    /// The acknowledged transaction id on acceptance, or `Rejected`.
    pub fn submit(&self, tx: &Transaction) -> Result<String, ClientError> {
        match self.sink.submit(tx) {
            Ok(ack) => Ok(ack.txid),
            Err(failure) => {
                warn!(
                    "submit of {} rejected: {} ({})",
                    tx.txid_hex(),
                    failure.description,
                    failure.code
                );
                Err(ClientError::Rejected {
                    code: failure.code,
                    description: failure.description,
                })
            }
        }
    }

    /// Build and submit a value transfer in one step.
    ///
    /// # Returns
    /// The transaction id of the accepted transfer, lowercase hex.
    pub fn transfer(
        &self,
        to: &str,
        amount: &BigInt,
        desc: &str,
    ) -> Result<String, ClientError> {
        let tx = self.build_transfer(to, amount, desc)?;
        self.submit(&tx)
    }
}

/// Client-side timestamp: nanoseconds since the Unix epoch.
fn now_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or_default()
}

/// Uniqueness nonce: timestamp plus an 8-digit random suffix.
fn gen_nonce() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..100_000_000);
    format!("{}{:08}", now_timestamp(), suffix)
}
