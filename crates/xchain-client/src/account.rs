//! Loading account key material.
//!
//! Accounts live on disk in the ledger's standard layout: a directory
//! holding `address`, `private.key`, and `public.key`, the key files in
//! the JSON interchange format.

use std::fs;
use std::path::Path;

use xchain_primitives::ec::{PrivateKey, PublicKey};
use xchain_primitives::Account;

use crate::ClientError;

/// External source of account key material.
pub trait KeyLoader {
    /// Load the account stored at `path`.
    fn load(&self, path: &Path) -> Result<Account, ClientError>;
}

/// Loads accounts from the ledger's on-disk directory layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirKeyLoader;

impl KeyLoader for DirKeyLoader {
    fn load(&self, path: &Path) -> Result<Account, ClientError> {
        let address = fs::read_to_string(path.join("address"))?
            .trim_end()
            .to_string();
        let private_key = PrivateKey::from_json(&fs::read_to_string(path.join("private.key"))?)?;
        let public_key = PublicKey::from_json(&fs::read_to_string(path.join("public.key"))?)?;
        Ok(Account::from_parts(address, private_key, public_key))
    }
}
