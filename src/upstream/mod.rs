//! Orthanc REST client subsystem.
//!
//! # Data Flow
//! ```text
//! handler call
//!     → client.rs (build authenticated request, send)
//!     → Orthanc REST API (/modalities/, /modalities/{name}, /system)
//!     → types.rs (decode JSON, classify failures)
//!     → Result<T, UpstreamError> back to the handler
//! ```

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{Modality, ModalityBody, SystemStatus, UpstreamError};
