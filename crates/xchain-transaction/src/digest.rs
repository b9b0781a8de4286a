//! Canonical digest encoder.
//!
//! Every validating node rebuilds the digest below from its own copy of a
//! transaction, so the byte sequence must be reproducible bit-for-bit from
//! the field values alone. The encoding contract:
//!
//! - Each included field contributes one line: its canonical JSON value
//!   followed by `\n`. An omitted optional field contributes no line.
//! - Canonical JSON means: object keys in lexicographic order, no
//!   whitespace, byte sequences as standard base64 strings, integers in
//!   decimal, booleans as `true`/`false`.
//! - Inside composite values (output/request/signature objects), fields
//!   holding their default value (0, empty bytes, empty string, empty
//!   list) are omitted. A top-level block whose list is empty still
//!   serializes as `[]`.
//!
//! Two entry points share the encoding: [`digest_for_signing`] leaves the
//! signature lines out, [`transaction_id`] includes them and is only
//! meaningful once all required signatures are attached.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Map, Value};

use xchain_primitives::hash::sha256d;

use crate::invoke::{InvokeRequest, ResourceLimit};
use crate::output::TxOutput;
use crate::transaction::{SignatureInfo, Transaction};

/// Compute the pre-signature digest: the 32-byte value the initiator (and
/// every auth-require co-signer) signs. Signature fields are excluded.
pub fn digest_for_signing(tx: &Transaction) -> [u8; 32] {
    encode(tx, false)
}

/// Compute the transaction id: the digest over the canonical encoding
/// including the attached signatures. Only valid after signing.
pub fn transaction_id(tx: &Transaction) -> [u8; 32] {
    encode(tx, true)
}

fn encode(tx: &Transaction, include_signs: bool) -> [u8; 32] {
    let mut enc = Encoder::new();

    for input in &tx.tx_inputs {
        if !input.ref_txid.is_empty() {
            enc.bytes(&input.ref_txid);
        }
        enc.int(i64::from(input.ref_offset));
        if !input.from_addr.is_empty() {
            enc.bytes(&input.from_addr);
        }
        if !input.amount.is_empty() {
            enc.bytes(&input.amount);
        }
        enc.int(input.frozen_height);
    }

    enc.value(Value::Array(
        tx.tx_outputs.iter().map(output_value).collect(),
    ));

    if !tx.desc.is_empty() {
        enc.bytes(&tx.desc);
    }
    enc.string(&tx.nonce);
    enc.int(tx.timestamp);
    enc.int(i64::from(tx.version));

    for entry in &tx.tx_inputs_ext {
        enc.string(&entry.bucket);
        if !entry.key.is_empty() {
            enc.bytes(&entry.key);
        }
        if !entry.ref_txid.is_empty() {
            enc.bytes(&entry.ref_txid);
        }
        enc.int(i64::from(entry.ref_offset));
    }

    for entry in &tx.tx_outputs_ext {
        enc.string(&entry.bucket);
        if !entry.key.is_empty() {
            enc.bytes(&entry.key);
        }
        if !entry.value.is_empty() {
            enc.bytes(&entry.value);
        }
    }

    enc.value(Value::Array(
        tx.contract_requests.iter().map(request_value).collect(),
    ));

    enc.string(&tx.initiator);
    enc.value(Value::Array(
        tx.auth_require
            .iter()
            .map(|a| Value::String(a.clone()))
            .collect(),
    ));

    if include_signs {
        enc.value(Value::Array(
            tx.initiator_signs.iter().map(signature_value).collect(),
        ));
        enc.value(Value::Array(
            tx.auth_require_signs.iter().map(signature_value).collect(),
        ));
    }

    enc.bool(tx.coinbase);
    enc.bool(tx.autogen);

    sha256d(enc.finish().as_bytes())
}

/// Line-oriented canonical encoder.
struct Encoder {
    buf: String,
}

impl Encoder {
    fn new() -> Self {
        Encoder { buf: String::new() }
    }

    fn value(&mut self, v: Value) {
        // serde_json maps are BTree-backed, so `to_string` emits sorted
        // keys with no whitespace: exactly the canonical form.
        self.buf.push_str(&v.to_string());
        self.buf.push('\n');
    }

    fn bytes(&mut self, b: &[u8]) {
        self.value(Value::String(BASE64.encode(b)));
    }

    fn string(&mut self, s: &str) {
        self.value(Value::String(s.to_string()));
    }

    fn int(&mut self, i: i64) {
        self.value(Value::from(i));
    }

    fn bool(&mut self, b: bool) {
        self.value(Value::Bool(b));
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn put_bytes(map: &mut Map<String, Value>, key: &str, b: &[u8]) {
    if !b.is_empty() {
        map.insert(key.to_string(), Value::String(BASE64.encode(b)));
    }
}

fn put_string(map: &mut Map<String, Value>, key: &str, s: &str) {
    if !s.is_empty() {
        map.insert(key.to_string(), Value::String(s.to_string()));
    }
}

fn put_int(map: &mut Map<String, Value>, key: &str, v: i64) {
    if v != 0 {
        map.insert(key.to_string(), Value::from(v));
    }
}

fn output_value(output: &TxOutput) -> Value {
    let mut map = Map::new();
    put_bytes(&mut map, "amount", &output.amount);
    put_int(&mut map, "frozen_height", output.frozen_height);
    put_bytes(&mut map, "to_addr", &output.to_addr);
    Value::Object(map)
}

fn limit_value(limit: &ResourceLimit) -> Value {
    let mut map = Map::new();
    put_int(&mut map, "limit", limit.limit);
    put_int(&mut map, "type", limit.kind.code());
    Value::Object(map)
}

fn request_value(request: &InvokeRequest) -> Value {
    let mut map = Map::new();
    if !request.args.is_empty() {
        let args: Map<String, Value> = request
            .args
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(BASE64.encode(v))))
            .collect();
        map.insert("args".to_string(), Value::Object(args));
    }
    put_string(&mut map, "contract_name", &request.contract_name);
    put_string(&mut map, "method_name", &request.method_name);
    put_string(&mut map, "module_name", &request.module_name);
    if !request.resource_limits.is_empty() {
        map.insert(
            "resource_limits".to_string(),
            Value::Array(request.resource_limits.iter().map(limit_value).collect()),
        );
    }
    Value::Object(map)
}

fn signature_value(info: &SignatureInfo) -> Value {
    let mut map = Map::new();
    put_string(&mut map, "public_key", &info.public_key);
    put_bytes(&mut map, "sign", &info.sign);
    Value::Object(map)
}
