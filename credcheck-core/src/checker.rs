//! Credential checker

use crate::credentials::CredentialStore;

/// Decides whether a username/password pair matches a known record.
///
/// The checker owns its store outright and never mutates it, so a single
/// instance can be shared across threads behind an `Arc` and every call with
/// the same input returns the same answer.
#[derive(Debug, Clone, Default)]
pub struct CredentialChecker {
    store: CredentialStore,
}

impl CredentialChecker {
    /// Create a checker over the given store
    pub fn new(store: CredentialStore) -> Self {
        CredentialChecker { store }
    }

    /// Check a login attempt. Absent fields never match.
    pub fn check(&self, username: Option<&str>, password: Option<&str>) -> bool {
        match (username, password) {
            (Some(username), Some(password)) => self.store.find(username, password).is_some(),
            _ => false,
        }
    }

    /// The store this checker consults
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}
