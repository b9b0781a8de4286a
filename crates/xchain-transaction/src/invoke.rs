//! Contract invocation requests and pre-execution results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::TxInputExt;
use crate::output::TxOutputExt;

/// A named consumable capped by a [`ResourceLimit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    /// Compute time.
    Cpu,
    /// Memory.
    Memory,
    /// Storage.
    Disk,
    /// Fee charged by kernel contracts.
    XFee,
}

impl ResourceType {
    /// The wire code of this resource type.
    pub fn code(self) -> i64 {
        match self {
            ResourceType::Cpu => 0,
            ResourceType::Memory => 1,
            ResourceType::Disk => 2,
            ResourceType::XFee => 3,
        }
    }
}

/// Cap on one named consumable for a contract invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimit {
    /// Which consumable is capped.
    pub kind: ResourceType,
    /// The cap value.
    pub limit: i64,
}

/// One contract invocation carried by a transaction.
///
/// Arguments are keyed by name in a `BTreeMap`, which keeps the
/// stable-lexicographic-order invariant structural: every iteration,
/// and therefore every serialization, sees the keys sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeRequest {
    /// Name of the VM module that runs the contract (e.g. "wasm").
    pub module_name: String,
    /// Name of the contract; empty for kernel method calls.
    pub contract_name: String,
    /// Method to invoke.
    pub method_name: String,
    /// Argument name to payload bytes, in sorted key order.
    pub args: BTreeMap<String, Vec<u8>>,
    /// Resource caps for this invocation.
    pub resource_limits: Vec<ResourceLimit>,
}

/// The portion of a contract pre-execution that is copied verbatim into
/// the assembled transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractResult {
    /// Total resource cost the pre-execution reported.
    pub gas_used: i64,
    /// Read set observed by the pre-execution.
    pub inputs: Vec<TxInputExt>,
    /// Write set produced by the pre-execution.
    pub outputs: Vec<TxOutputExt>,
    /// Downstream invocation requests, argument key order preserved.
    pub requests: Vec<InvokeRequest>,
}
