//! The ledger's JSON key interchange format.
//!
//! Keys travel as `{"Curvname":"P-256","X":<dec>,"Y":<dec>,"D":<dec>}` where
//! the coordinates are arbitrary-size decimal integers. `D` is present only
//! in private key files.

use num_bigint::BigUint;
use serde::Deserialize;

use crate::ec::CURVE_NAME;
use crate::PrimitivesError;

/// Raw deserialized form of a key file.
#[derive(Deserialize)]
pub(crate) struct RawKeyFile {
    #[serde(rename = "Curvname")]
    pub curvname: String,
    #[serde(rename = "X")]
    pub x: serde_json::Number,
    #[serde(rename = "Y")]
    pub y: serde_json::Number,
    #[serde(rename = "D", default)]
    pub d: Option<serde_json::Number>,
}

/// Parse a key file and check that it names the fixed curve.
pub(crate) fn parse(json: &str) -> Result<RawKeyFile, PrimitivesError> {
    let raw: RawKeyFile = serde_json::from_str(json)
        .map_err(|e| PrimitivesError::InvalidKey(format!("key json: {}", e)))?;
    if raw.curvname != CURVE_NAME {
        return Err(PrimitivesError::InvalidKey(format!(
            "unsupported curve {:?}, expected {:?}",
            raw.curvname, CURVE_NAME
        )));
    }
    Ok(raw)
}

/// Convert one decimal coordinate into a fixed 32-byte big-endian array.
pub(crate) fn coordinate(
    n: &serde_json::Number,
    field: &str,
) -> Result<[u8; 32], PrimitivesError> {
    let value = BigUint::parse_bytes(n.to_string().as_bytes(), 10).ok_or_else(|| {
        PrimitivesError::InvalidKey(format!("{} is not a non-negative decimal integer", field))
    })?;
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(PrimitivesError::InvalidKey(format!(
            "{} does not fit the 32-byte coordinate width",
            field
        )));
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Render a 32-byte big-endian value as a decimal string.
pub(crate) fn decimal(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(10)
}

/// Build the canonical key-file JSON for the given coordinates.
pub(crate) fn encode(x: &[u8; 32], y: &[u8; 32], d: Option<&[u8; 32]>) -> String {
    match d {
        Some(d) => format!(
            "{{\"Curvname\":\"{}\",\"X\":{},\"Y\":{},\"D\":{}}}",
            CURVE_NAME,
            decimal(x),
            decimal(y),
            decimal(d)
        ),
        None => format!(
            "{{\"Curvname\":\"{}\",\"X\":{},\"Y\":{}}}",
            CURVE_NAME,
            decimal(x),
            decimal(y)
        ),
    }
}
