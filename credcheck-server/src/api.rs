//! API request and response types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned when the credentials match a known record
pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Message returned for every rejected login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login request body. Both fields may be absent.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Account name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Plaintext password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Read the login fields out of a decoded JSON body.
    ///
    /// A repeated key keeps its last value. Fields that are not strings, and
    /// bodies that are not objects, count as absent.
    pub fn from_json(body: &serde_json::Value) -> Self {
        let field = |name: &str| {
            body.get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };

        LoginRequest {
            username: field("username"),
            password: field("password"),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Login response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable outcome
    pub message: String,
}

impl LoginResponse {
    /// Response for a matching login
    pub fn success() -> Self {
        LoginResponse {
            message: LOGIN_SUCCESSFUL.to_string(),
        }
    }

    /// Response for a rejected login
    pub fn invalid() -> Self {
        LoginResponse {
            message: INVALID_CREDENTIALS.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: HealthStatus,

    /// Service version
    pub version: String,

    /// Uptime in seconds
    pub uptime_seconds: u64,

    /// Number of records in the credential store
    pub known_users: usize,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy
    Healthy,
}
