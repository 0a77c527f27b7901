//! Request identity middleware.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per request
//! - Propagate the ID to the response for correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line carries it

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// UUID v4 generator for [`tower_http::request_id::SetRequestIdLayer`].
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}
