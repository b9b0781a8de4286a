//! Tests for the xchain-client crate, using in-memory collaborators.

use std::cell::RefCell;
use std::fs;

use num_bigint::BigInt;
use num_traits::Zero;

use xchain_primitives::ec::PrivateKey;
use xchain_primitives::Account;
use xchain_transaction::utxo::ProviderError;
use xchain_transaction::{
    amount, ContractResult, SpendableOutput, Transaction, TransactionError, TxOutputExt,
    UtxoProvider, UtxoSelection,
};

use crate::account::{DirKeyLoader, KeyLoader};
use crate::contract::{ContractResponse, InvokeOutcome};
use crate::submit::{SubmitFailure, SubmitSuccess, TransactionSink};
use crate::{ClientError, XChainClient};

// -----------------------------------------------------------------------
// In-memory collaborators
// -----------------------------------------------------------------------

/// Provider backed by a fixed output table.
struct MemoryProvider {
    outputs: Vec<SpendableOutput>,
}

impl MemoryProvider {
    fn with_amounts(owner: &str, amounts: &[i64]) -> Self {
        let outputs = amounts
            .iter()
            .enumerate()
            .map(|(i, v)| SpendableOutput {
                ref_txid: vec![i as u8 + 1; 32],
                ref_offset: i as i32,
                to_addr: owner.as_bytes().to_vec(),
                amount: amount::to_bytes(&BigInt::from(*v)).unwrap(),
                frozen_height: 0,
            })
            .collect();
        MemoryProvider { outputs }
    }
}

impl UtxoProvider for MemoryProvider {
    fn provide(
        &self,
        address: &str,
        min_amount: &BigInt,
    ) -> Result<UtxoSelection, ProviderError> {
        let mut picked = Vec::new();
        let mut total = BigInt::zero();
        for output in &self.outputs {
            if output.to_addr == address.as_bytes() {
                total += amount::from_bytes(&output.amount);
                picked.push(output.clone());
                if &total >= min_amount {
                    break;
                }
            }
        }
        if &total < min_amount {
            return Err(ProviderError::InsufficientFunds);
        }
        Ok(UtxoSelection {
            outputs: picked,
            total_selected: total,
        })
    }
}

/// Sink that records accepted transactions, or rejects everything.
struct MemorySink {
    accepted: RefCell<Vec<Transaction>>,
    reject: Option<SubmitFailure>,
}

impl MemorySink {
    fn accepting() -> Self {
        MemorySink {
            accepted: RefCell::new(Vec::new()),
            reject: None,
        }
    }

    fn rejecting(code: &str, description: &str) -> Self {
        MemorySink {
            accepted: RefCell::new(Vec::new()),
            reject: Some(SubmitFailure {
                code: code.to_string(),
                description: description.to_string(),
            }),
        }
    }
}

impl TransactionSink for MemorySink {
    fn submit(&self, tx: &Transaction) -> Result<SubmitSuccess, SubmitFailure> {
        if let Some(failure) = &self.reject {
            return Err(failure.clone());
        }
        self.accepted.borrow_mut().push(tx.clone());
        Ok(SubmitSuccess { txid: tx.txid_hex() })
    }
}

fn test_account(address: &str) -> Account {
    let mut scalar = [0u8; 32];
    scalar[31] = 3;
    Account::new(address, PrivateKey::from_bytes(&scalar).unwrap())
}

// -----------------------------------------------------------------------
// Transfers
// -----------------------------------------------------------------------

#[test]
fn test_transfer_end_to_end() {
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[100]),
        MemorySink::accepting(),
    );

    let tx = client.build_transfer("B", &BigInt::from(30), "lunch").unwrap();
    assert_eq!(tx.tx_outputs.len(), 2, "transfer plus change");
    assert_eq!(tx.total_input_amount(), tx.total_output_amount());
    assert_eq!(tx.desc, b"lunch".to_vec());

    let txid = client.submit(&tx).unwrap();
    assert_eq!(txid, tx.txid_hex());
}

#[test]
fn test_transfer_convenience_submits() {
    let sink = MemorySink::accepting();
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[40, 40]),
        sink,
    );

    let txid = client.transfer("B", &BigInt::from(50), "").unwrap();
    assert_eq!(txid.len(), 64, "txid is 32 bytes of hex");
}

#[test]
fn test_transfer_insufficient_funds() {
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[100]),
        MemorySink::accepting(),
    );

    let result = client.build_transfer("B", &BigInt::from(150), "");
    assert!(matches!(
        result,
        Err(ClientError::Transaction(
            TransactionError::InsufficientFunds { .. }
        ))
    ));
}

#[test]
fn test_transfer_rejects_bad_parameters() {
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[100]),
        MemorySink::accepting(),
    );

    assert!(matches!(
        client.build_transfer("", &BigInt::from(10), ""),
        Err(ClientError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.build_transfer("B", &BigInt::from(-10), ""),
        Err(ClientError::InvalidRequest(_))
    ));
}

#[test]
fn test_submission_rejection_is_surfaced() {
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[100]),
        MemorySink::rejecting("409", "double spend"),
    );

    let tx = client.build_transfer("B", &BigInt::from(10), "").unwrap();
    assert!(matches!(
        client.submit(&tx),
        Err(ClientError::Rejected { .. })
    ));
}

// -----------------------------------------------------------------------
// Contract invocations
// -----------------------------------------------------------------------

fn passing_outcome(gas_used: i64) -> InvokeOutcome {
    InvokeOutcome {
        result: ContractResult {
            gas_used,
            outputs: vec![TxOutputExt {
                bucket: "contract".to_string(),
                key: b"k".to_vec(),
                value: b"v".to_vec(),
            }],
            ..Default::default()
        },
        responses: vec![ContractResponse {
            status: 200,
            message: "ok".to_string(),
            body: b"done".to_vec(),
        }],
    }
}

#[test]
fn test_contract_invocation_builds_fee_and_change() {
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[100]),
        MemorySink::accepting(),
    );

    let selection = client.select_utxo(&BigInt::from(30)).unwrap();
    let auth = vec!["XC0000000000000001@xuper/A".to_string()];
    let tx = client
        .build_contract_invocation(Some(selection), &passing_outcome(30), &auth, "")
        .unwrap();

    assert_eq!(tx.tx_outputs.len(), 2, "fee plus change");
    assert_eq!(tx.tx_outputs_ext.len(), 1);
    assert_eq!(tx.auth_require_signs, tx.initiator_signs);
}

/// A failing contract response aborts the build; no transaction is
/// assembled around a failed execution.
#[test]
fn test_contract_failure_is_surfaced() {
    let client = XChainClient::new(
        test_account("A"),
        MemoryProvider::with_amounts("A", &[100]),
        MemorySink::accepting(),
    );

    let mut outcome = passing_outcome(10);
    outcome.responses.push(ContractResponse {
        status: 500,
        message: "assertion failed".to_string(),
        body: Vec::new(),
    });

    let result = client.build_contract_invocation(None, &outcome, &[], "");
    assert!(matches!(
        result,
        Err(ClientError::ContractFailed { status: 500, .. })
    ));
}

// -----------------------------------------------------------------------
// Key loading
// -----------------------------------------------------------------------

#[test]
fn test_dir_key_loader_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let account = Account::new("TeyyPLpp9L7QAcxHangtcHTu7HUZ6iydY", PrivateKey::new());

    fs::write(dir.path().join("address"), &account.address).unwrap();
    fs::write(
        dir.path().join("private.key"),
        account.private_key.to_json(),
    )
    .unwrap();
    fs::write(dir.path().join("public.key"), account.public_key.to_json()).unwrap();

    let loaded = DirKeyLoader.load(dir.path()).unwrap();
    assert_eq!(loaded.address, account.address);
    assert_eq!(loaded.private_key, account.private_key);
    assert_eq!(loaded.public_key, account.public_key);

    // The loaded keys sign and verify together.
    let digest = xchain_primitives::hash::sha256d(b"loader check");
    let sig = loaded.private_key.sign(&digest).unwrap();
    assert!(loaded.public_key.verify(&digest, &sig));
}

#[test]
fn test_dir_key_loader_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        DirKeyLoader.load(dir.path()),
        Err(ClientError::Io(_))
    ));
}
