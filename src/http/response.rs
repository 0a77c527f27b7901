//! Failure-to-response translation at the route boundary.
//!
//! # Responsibilities
//! - Map every handler failure to a JSON `{"error": <message>}` body
//! - Keep the upstream's status code when it answered with one
//! - Everything else (transport, decode, render, parse) is a 500
//!
//! # Design Decisions
//! - One mapping for all routes; handlers never build error bodies
//! - Upstream error bodies pass through as the error message

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Error type for gateway request handling.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream call failed; see [`UpstreamError`] for the taxonomy.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Local failure inside the gateway (form parsing, template render).
    #[error("{0}")]
    Internal(String),
}

impl From<askama::Error> for GatewayError {
    fn from(err: askama::Error) -> Self {
        GatewayError::Internal(format!("template render failed: {}", err))
    }
}

/// JSON error body returned to the browser.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl GatewayError {
    /// Status code for this failure: the upstream's when it answered,
    /// 500 otherwise.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Upstream(UpstreamError::Http { status, .. }) => {
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            GatewayError::Upstream(UpstreamError::Http { body, .. }) => body,
            other => other.to_string(),
        };

        tracing::warn!(status = %status, error = %message, "Request failed");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
