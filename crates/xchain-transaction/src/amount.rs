//! Wire form of ledger amounts.
//!
//! The ledger carries every amount as a big-endian unsigned magnitude with
//! no superfluous sign byte; zero is the empty byte string.

use num_bigint::{BigInt, Sign};

use crate::TransactionError;

/// Convert an amount into its wire form.
///
/// # Arguments
/// * `amount` - The amount; must be non-negative.
///
/// # Returns
/// The minimal big-endian magnitude (empty for zero), or `InvalidRequest`
/// for a negative amount.
pub fn to_bytes(amount: &BigInt) -> Result<Vec<u8>, TransactionError> {
    match amount.sign() {
        Sign::Minus => Err(TransactionError::InvalidRequest(format!(
            "negative amount {}",
            amount
        ))),
        Sign::NoSign => Ok(Vec::new()),
        Sign::Plus => Ok(amount.to_bytes_be().1),
    }
}

/// Reconstruct an amount from its wire form. The empty byte string is zero.
pub fn from_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}
