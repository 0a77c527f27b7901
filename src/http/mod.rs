//! HTTP gateway subsystem.
//!
//! # Data Flow
//! ```text
//! browser request
//!     → server.rs (axum router, request ID, trace layer)
//!     → handlers.rs (form/path extraction, one upstream call)
//!     → pages (rendered HTML) on success
//!     → response.rs ({"error": ...} JSON) on failure
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::GatewayError;
pub use server::{AppState, HttpServer};
