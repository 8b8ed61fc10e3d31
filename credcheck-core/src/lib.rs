//! credcheck Core - in-memory username/password verification
//!
//! This crate holds the credential store and the checker that scans it.
//! It has no knowledge of HTTP; the server and CLI crates build on it.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod checker;
pub mod credentials;
pub mod error;

pub use checker::CredentialChecker;
pub use credentials::{Credential, CredentialStore};
pub use error::{CredCheckError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
