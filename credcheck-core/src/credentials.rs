//! Credential records and the immutable store they live in
//!
//! A [`CredentialStore`] is built once, either from the built-in records or
//! from a TOML file, and never changes afterwards. Lookups are an ordered,
//! exact-match scan.

use crate::error::{CredCheckError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A known (username, password) pair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Account name, compared byte-for-byte
    pub username: String,
    /// Plaintext password, compared byte-for-byte
    pub password: String,
}

impl Credential {
    /// Create a new credential record
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

// Passwords must never reach log output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// On-disk layout of a credentials file
#[derive(Debug, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    credentials: Vec<Credential>,
}

/// Ordered, immutable collection of credential records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    records: Arc<[Credential]>,
}

impl CredentialStore {
    /// Create a store from records, keeping their order
    pub fn new(records: Vec<Credential>) -> Self {
        CredentialStore {
            records: records.into(),
        }
    }

    /// The records every process starts with unless configured otherwise
    pub fn builtin() -> Self {
        Self::new(vec![
            Credential::new("user1", "password1"),
            Credential::new("user2", "password2"),
        ])
    }

    /// Parse a store from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CredentialFile = toml::from_str(contents)?;

        if file.credentials.is_empty() {
            return Err(CredCheckError::ConfigError(
                "no credentials defined".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(file.credentials.len());
        for record in &file.credentials {
            if !seen.insert(record.username.as_str()) {
                return Err(CredCheckError::ConfigError(format!(
                    "duplicate username: {}",
                    record.username
                )));
            }
        }

        Ok(Self::new(file.credentials))
    }

    /// Read and parse a credentials file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&contents)?;
        info!(
            "Loaded {} credentials from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// First record matching both fields, scanning in order
    pub fn find(&self, username: &str, password: &str) -> Option<&Credential> {
        self.records
            .iter()
            .find(|record| record.matches(username, password))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in store order
    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.records.iter()
    }

    /// Usernames in store order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.username.as_str())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::builtin()
    }
}
