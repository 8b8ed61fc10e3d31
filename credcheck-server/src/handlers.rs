//! HTTP request handlers

use crate::api::{HealthResponse, HealthStatus, LoginRequest, LoginResponse};
use crate::error::{ApiError, ApiResult};
use crate::metrics::{self, LatencyTimer};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, Method, Uri},
    Json,
};
use tracing::{debug, info, warn};

/// Whether the request declares exactly `application/json`, parameters allowed
fn is_plain_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Handle a login attempt.
///
/// Every failure, including an undecodable body, maps to the same 401 so a
/// caller cannot tell why a login was refused.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let timer = LatencyTimer::new();

    // Only plain application/json bodies are read; `+json` suffix types are not.
    let req = if !is_plain_json(&headers) {
        debug!("Ignoring login body: content type is not application/json");
        metrics::record_rejected_body();
        LoginRequest::default()
    } else {
        match payload {
            Ok(Json(body)) => LoginRequest::from_json(&body),
            Err(rejection) => {
                debug!("Undecodable login body: {}", rejection.body_text());
                metrics::record_rejected_body();
                LoginRequest::default()
            }
        }
    };

    let span = crate::tracing::create_login_span(req.username.as_deref());
    let matched = span.in_scope(|| {
        state
            .checker
            .check(req.username.as_deref(), req.password.as_deref())
    });

    let outcome = if matched { "success" } else { "failure" };
    let elapsed = timer.elapsed_seconds();
    crate::tracing::record_outcome(&span, outcome, elapsed * 1000.0);
    metrics::record_login(outcome, elapsed);

    if matched {
        info!(
            "Login accepted for {}",
            req.username.as_deref().unwrap_or_default()
        );
        Ok(Json(LoginResponse::success()))
    } else {
        info!(
            "Login rejected for {}",
            req.username.as_deref().unwrap_or("<missing>")
        );
        Err(ApiError::InvalidCredentials)
    }
}

fn health_response(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        known_users: state.known_users(),
    }
}

/// Health check - liveness probe
pub async fn health_live(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_response(&state))
}

/// Health check - readiness probe
pub async fn health_ready(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    if state.known_users() == 0 {
        warn!("Readiness check failed: credential store is empty");
        return Err(ApiError::ServiceUnavailable(
            "No credentials loaded".to_string(),
        ));
    }

    Ok(Json(health_response(&state)))
}

/// Prometheus metrics endpoint
pub async fn metrics() -> ApiResult<String> {
    metrics::get_prometheus_metrics()
        .ok_or_else(|| ApiError::Internal("Metrics exporter not initialized".to_string()))
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!("No route for {} {}", method, uri.path());
    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}
