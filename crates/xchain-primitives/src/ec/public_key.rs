//! NIST P-256 public key for signature verification.
//!
//! Wraps a p256 verifying key and retains the JSON key text it was parsed
//! from: transactions embed that text verbatim in their signature entries,
//! so it must survive a parse round-trip byte-for-byte.

use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::VerifyingKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;

use crate::ec::keyfile;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// A P-256 public key for ECDSA verification.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying p256 verifying key.
    inner: VerifyingKey,
    /// The JSON key text this key serializes to (and, when parsed from a
    /// file, the exact text it was parsed from).
    raw: String,
}

impl PublicKey {
    /// Parse a public key from the ledger's JSON key format.
    ///
    /// Expects `{"Curvname":"P-256","X":...,"Y":...}` with decimal integer
    /// coordinates. The input text is retained verbatim and returned by
    /// [`PublicKey::to_json`].
    ///
    /// # Arguments
    /// * `json` - The key file contents.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or `InvalidKey` when the curve name is
    /// wrong or (X, Y) is not a point on the curve.
    pub fn from_json(json: &str) -> Result<Self, PrimitivesError> {
        let raw = keyfile::parse(json)?;
        let x = keyfile::coordinate(&raw.x, "X")?;
        let y = keyfile::coordinate(&raw.y, "Y")?;

        let point = p256::EncodedPoint::from_affine_coordinates(
            &p256::FieldBytes::from(x),
            &p256::FieldBytes::from(y),
            false,
        );
        let inner = VerifyingKey::from_encoded_point(&point)
            .map_err(|_| PrimitivesError::InvalidKey("point not on curve".to_string()))?;

        Ok(PublicKey {
            inner,
            raw: json.to_string(),
        })
    }

    /// Build a public key directly from a p256 verifying key.
    ///
    /// The JSON text is generated in the canonical key-file form.
    pub fn from_verifying_key(inner: VerifyingKey) -> Self {
        let point = inner.to_encoded_point(false);
        let bytes = point.as_bytes();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..65]);

        PublicKey {
            inner,
            raw: keyfile::encode(&x, &y, None),
        }
    }

    /// The JSON key text, as embedded in transaction signature entries.
    pub fn to_json(&self) -> &str {
        &self.raw
    }

    /// Verify a raw (r, s) signature against a digest.
    ///
    /// # Arguments
    /// * `digest` - The digest that was signed.
    /// * `sig` - The signature to check.
    ///
    /// # Returns
    /// `true` if the signature is valid for this key, `false` otherwise.
    /// A mismatch is never an error.
    pub fn verify(&self, digest: &[u8], sig: &Signature) -> bool {
        let parsed = match p256::ecdsa::Signature::from_scalars(
            p256::FieldBytes::from(*sig.r()),
            p256::FieldBytes::from(*sig.s()),
        ) {
            Ok(s) => s,
            Err(_) => return false,
        };
        self.inner.verify_prehash(digest, &parsed).is_ok()
    }

    /// Verify a DER-encoded signature against a digest.
    ///
    /// # Returns
    /// `Ok(true)` when the signature matches, `Ok(false)` on a mismatch,
    /// and `MalformedSignature` only when the envelope cannot be decoded.
    pub fn verify_der(&self, digest: &[u8], der: &[u8]) -> Result<bool, PrimitivesError> {
        let sig = Signature::from_der(der)?;
        Ok(self.verify(digest, &sig))
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner.to_encoded_point(true).as_bytes()
            == other.inner.to_encoded_point(true).as_bytes()
    }
}

impl Eq for PublicKey {}
