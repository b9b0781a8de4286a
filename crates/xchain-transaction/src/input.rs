//! Transaction inputs: spent UTXO references and contract read entries.

use serde::{Deserialize, Serialize};

/// A single UTXO input of a transaction.
///
/// References a spendable output of a prior transaction by id and offset.
/// The owner address and amount are duplicated here so the transaction is
/// self-contained for hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Transaction id of the referenced output.
    pub ref_txid: Vec<u8>,
    /// Offset of the referenced output within that transaction.
    pub ref_offset: i32,
    /// Address that owns the referenced output.
    pub from_addr: Vec<u8>,
    /// Amount of the referenced output, in wire form (big-endian magnitude).
    pub amount: Vec<u8>,
    /// Height until which the referenced output is frozen, 0 if unfrozen.
    pub frozen_height: i64,
}

/// A contract read-set entry: one key a contract pre-execution read,
/// with the version (txid + offset) it observed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInputExt {
    /// State bucket the key lives in.
    pub bucket: String,
    /// The key that was read.
    pub key: Vec<u8>,
    /// Transaction id of the write this read observed.
    pub ref_txid: Vec<u8>,
    /// Offset of that write within its transaction.
    pub ref_offset: i32,
}
