//! NIST P-256 private key for transaction signing.
//!
//! Wraps a p256 signing key and adds the ledger's JSON key interchange
//! format. The scalar exists only inside this type while a sign operation
//! runs; it is never copied into transaction structures and its memory is
//! zeroized on drop.

use p256::ecdsa::signature::hazmat::PrehashSigner;
use p256::ecdsa::SigningKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;

use crate::ec::keyfile;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key scalar in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A P-256 private key for ECDSA signing.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying p256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    ///
    /// # Returns
    /// A new randomly generated `PrivateKey`.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes form a valid non-zero scalar on P-256,
    /// or `InvalidKey` otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let inner = SigningKey::from_bytes(p256::FieldBytes::from_slice(bytes))
            .map_err(|e| PrimitivesError::InvalidKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Parse a private key from the ledger's JSON key format.
    ///
    /// Expects `{"Curvname":"P-256","X":...,"Y":...,"D":...}` with decimal
    /// integer coordinates. Only `D` is used to reconstruct the scalar; the
    /// public point is re-derived from it.
    ///
    /// # Arguments
    /// * `json` - The key file contents.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or `InvalidKey` when the curve name is
    /// wrong, `D` is missing, or the scalar cannot be reconstructed.
    pub fn from_json(json: &str) -> Result<Self, PrimitivesError> {
        let raw = keyfile::parse(json)?;
        let d = raw
            .d
            .as_ref()
            .ok_or_else(|| PrimitivesError::InvalidKey("missing D component".to_string()))?;
        let scalar = keyfile::coordinate(d, "D")?;
        Self::from_bytes(&scalar)
    }

    /// Serialize the private key as a 32-byte big-endian scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key in the ledger's JSON key format.
    ///
    /// # Returns
    /// A `{"Curvname":"P-256","X":...,"Y":...,"D":...}` string with decimal
    /// coordinates, as written to a `private.key` file.
    pub fn to_json(&self) -> String {
        let point = self.inner.verifying_key().to_encoded_point(false);
        let bytes = point.as_bytes();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..65]);
        keyfile::encode(&x, &y, Some(&self.to_bytes()))
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(*self.inner.verifying_key())
    }

    /// Sign a 32-byte digest, producing a raw fixed-width (r, s) pair.
    ///
    /// Uses RFC 6979 deterministic nonces. Callers wrap the result with
    /// [`Signature::to_der`] before placing it on the wire.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest to sign.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if the underlying
    /// implementation rejects the request.
    pub fn sign(&self, digest: &[u8]) -> Result<Signature, PrimitivesError> {
        let sig: p256::ecdsa::Signature = self
            .inner
            .sign_prehash(digest)
            .map_err(|e| PrimitivesError::SigningFailed(e.to_string()))?;

        let (r_bytes, s_bytes) = sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);
        Ok(Signature::new(r, s))
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // The signing key holds the scalar; wipe its byte representation.
        let mut bytes = self.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
