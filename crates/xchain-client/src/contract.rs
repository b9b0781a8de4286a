//! Contract invocation modeling on the client side.

use xchain_transaction::ContractResult;

use crate::ClientError;

/// Contract responses at or above this status indicate failure.
const STATUS_ERROR_THRESHOLD: i32 = 400;

/// The VM that hosts a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VmType {
    /// WASM contracts.
    Wasm,
    /// Native contracts.
    Native,
    /// EVM contracts.
    Evm,
    /// Kernel methods (account creation, contract deployment).
    XKernel,
}

impl VmType {
    /// The module name used in invocation requests.
    pub fn name(self) -> &'static str {
        match self {
            VmType::Wasm => "wasm",
            VmType::Native => "native",
            VmType::Evm => "evm",
            VmType::XKernel => "xkernel",
        }
    }

    /// Parse a module name.
    pub fn from_name(name: &str) -> Result<Self, ClientError> {
        match name.to_ascii_lowercase().as_str() {
            "wasm" => Ok(VmType::Wasm),
            "native" => Ok(VmType::Native),
            "evm" => Ok(VmType::Evm),
            "xkernel" => Ok(VmType::XKernel),
            other => Err(ClientError::InvalidRequest(format!(
                "unknown contract VM {:?}",
                other
            ))),
        }
    }
}

/// One contract's response from a pre-execution.
#[derive(Clone, Debug, Default)]
pub struct ContractResponse {
    /// Status code; values >= 400 are failures.
    pub status: i32,
    /// Message reported by the contract runtime.
    pub message: String,
    /// Response body.
    pub body: Vec<u8>,
}

/// A complete contract pre-execution outcome: the state sets and requests
/// to embed in the transaction, plus the per-contract responses.
#[derive(Clone, Debug, Default)]
pub struct InvokeOutcome {
    /// The portion copied verbatim into the transaction.
    pub result: ContractResult,
    /// One response per executed request.
    pub responses: Vec<ContractResponse>,
}

impl InvokeOutcome {
    /// Check every response for a failing status.
    ///
    /// A status at or above 400 means the contract itself failed and the
    /// invocation must not become a transaction.
    pub fn ensure_success(&self) -> Result<(), ClientError> {
        for response in &self.responses {
            if response.status >= STATUS_ERROR_THRESHOLD {
                return Err(ClientError::ContractFailed {
                    status: response.status,
                    message: response.message.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_type_names_roundtrip() {
        for vm in [VmType::Wasm, VmType::Native, VmType::Evm, VmType::XKernel] {
            assert_eq!(VmType::from_name(vm.name()).unwrap(), vm);
        }
        assert_eq!(VmType::from_name("WASM").unwrap(), VmType::Wasm);
        assert!(VmType::from_name("jvm").is_err());
    }

    #[test]
    fn test_ensure_success_threshold() {
        let mut outcome = InvokeOutcome::default();
        outcome.responses.push(ContractResponse {
            status: 200,
            message: "ok".to_string(),
            body: b"5".to_vec(),
        });
        assert!(outcome.ensure_success().is_ok());

        outcome.responses.push(ContractResponse {
            status: 500,
            message: "out of gas".to_string(),
            body: Vec::new(),
        });
        assert!(matches!(
            outcome.ensure_success(),
            Err(ClientError::ContractFailed { status: 500, .. })
        ));
    }
}
