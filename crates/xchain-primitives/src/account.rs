//! A user account: an address together with its P-256 keypair.

use crate::ec::{PrivateKey, PublicKey};

/// Key material for one ledger account.
///
/// Owned by the calling context. The keys never travel inside a
/// transaction; signing embeds only the public key's JSON text.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account address, as read from the ledger's `address` file.
    pub address: String,
    /// The signing key.
    pub private_key: PrivateKey,
    /// The verification key, retaining its original JSON text.
    pub public_key: PublicKey,
}

impl Account {
    /// Build an account from an address and a private key, deriving the
    /// public half.
    pub fn new(address: impl Into<String>, private_key: PrivateKey) -> Self {
        let public_key = private_key.pub_key();
        Account {
            address: address.into(),
            private_key,
            public_key,
        }
    }

    /// Build an account from already-loaded key material.
    pub fn from_parts(
        address: impl Into<String>,
        private_key: PrivateKey,
        public_key: PublicKey,
    ) -> Self {
        Account {
            address: address.into(),
            private_key,
            public_key,
        }
    }
}
