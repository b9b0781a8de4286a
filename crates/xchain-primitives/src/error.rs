/// Unified error type for all primitives operations.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// Key material could not be reconstructed into a point/scalar on the
    /// fixed curve (bad curve name, oversized coordinate, off-curve point).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A DER signature envelope failed to decode.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// The underlying ECDSA implementation rejected a sign request.
    #[error("signing failed: {0}")]
    SigningFailed(String),
}
