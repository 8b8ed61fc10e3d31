//! Application state

use credcheck_core::CredentialChecker;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The credential checker
    pub checker: Arc<CredentialChecker>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(checker: Arc<CredentialChecker>) -> Self {
        Self {
            checker,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Number of records the checker consults
    pub fn known_users(&self) -> usize {
        self.checker.store().len()
    }
}
