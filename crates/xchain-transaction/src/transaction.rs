//! The transaction aggregate.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::amount;
use crate::input::{TxInput, TxInputExt};
use crate::invoke::InvokeRequest;
use crate::output::{TxOutput, TxOutputExt};

/// One attached signature: the signer's public key JSON text plus the
/// DER-encoded signature bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// The signer's public key in the ledger's JSON key format.
    pub public_key: String,
    /// DER-encoded ECDSA signature over the pre-signature digest.
    pub sign: Vec<u8>,
}

/// A complete ledger transaction.
///
/// Built once by the assembler, signed once, and immutable thereafter.
/// `txid` is derived last: it hashes the canonical encoding including the
/// attached signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Derived transaction id; empty until signing completes.
    pub txid: Vec<u8>,
    /// UTXO inputs.
    pub tx_inputs: Vec<TxInput>,
    /// UTXO outputs.
    pub tx_outputs: Vec<TxOutput>,
    /// Free-form description bytes.
    pub desc: Vec<u8>,
    /// Whether this is a coinbase transaction. Always false for
    /// client-built transactions.
    pub coinbase: bool,
    /// Uniqueness nonce.
    pub nonce: String,
    /// Client-side timestamp.
    pub timestamp: i64,
    /// Transaction format version.
    pub version: i32,
    /// Whether the ledger generated this transaction itself. Always false
    /// for client-built transactions.
    pub autogen: bool,
    /// Contract read set.
    pub tx_inputs_ext: Vec<TxInputExt>,
    /// Contract write set.
    pub tx_outputs_ext: Vec<TxOutputExt>,
    /// Contract invocation requests.
    pub contract_requests: Vec<InvokeRequest>,
    /// Address that initiated the transaction.
    pub initiator: String,
    /// Additional addresses whose authorization is required.
    pub auth_require: Vec<String>,
    /// Signature(s) of the initiator.
    pub initiator_signs: Vec<SignatureInfo>,
    /// Signature(s) covering the auth-require list.
    pub auth_require_signs: Vec<SignatureInfo>,
}

impl Transaction {
    /// Sum of all input amounts.
    pub fn total_input_amount(&self) -> BigInt {
        self.tx_inputs
            .iter()
            .map(|i| amount::from_bytes(&i.amount))
            .sum()
    }

    /// Sum of all output amounts.
    pub fn total_output_amount(&self) -> BigInt {
        self.tx_outputs
            .iter()
            .map(|o| amount::from_bytes(&o.amount))
            .sum()
    }

    /// The transaction id as a lowercase hex string.
    pub fn txid_hex(&self) -> String {
        hex::encode(&self.txid)
    }
}
