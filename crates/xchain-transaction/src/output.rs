//! Transaction outputs: value destinations and contract write entries.

use serde::{Deserialize, Serialize};

/// A single UTXO output of a transaction.
///
/// Created during assembly and never mutated afterward.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount locked to the destination, in wire form (big-endian magnitude).
    pub amount: Vec<u8>,
    /// Destination address.
    pub to_addr: Vec<u8>,
    /// Height until which this output is frozen, 0 if unfrozen.
    pub frozen_height: i64,
}

/// A contract write-set entry: one key/value pair a contract pre-execution
/// produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutputExt {
    /// State bucket the key lives in.
    pub bucket: String,
    /// The key being written.
    pub key: Vec<u8>,
    /// The value being written.
    pub value: Vec<u8>,
}
