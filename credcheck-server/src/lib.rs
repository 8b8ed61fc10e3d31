//! credcheck HTTP Server - JSON login endpoint
//!
//! This crate exposes the credential checker from `credcheck-core` over
//! HTTP, along with health probes and Prometheus metrics.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod tracing;

pub use api::{HealthResponse, LoginRequest, LoginResponse};
pub use config::{LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
