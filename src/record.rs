// The user record as it appears in the store file.

use crate::hash::hash_password;
use serde::{Deserialize, Serialize};

/// One stored user. The name field keeps its on-disk key `nom` so files
/// written by earlier versions of the form stay readable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl UserRecord {
    /// Build a record from the form answers, hashing `password` so the
    /// plaintext never lands in the struct.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: &str) -> Self {
        UserRecord {
            name: name.into(),
            email: email.into(),
            password_hash: hash_password(password),
        }
    }
}
