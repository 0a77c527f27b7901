//! Web front-end for managing DICOM modalities on an Orthanc server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser Request           ┌──────────────────────────────────────────┐
//!     ─────────────────────────▶│  http (axum router + handlers)           │
//!                               │        │                                 │
//!                               │        ▼                                 │
//!                               │  upstream (Orthanc REST client,          │──▶ Orthanc
//!                               │            basic auth via reqwest)       │    Server
//!                               │        │                                 │
//!     Rendered Page / JSON      │        ▼                                 │
//!     ◀─────────────────────────│  pages (askama templates)                │
//!                               │                                          │
//!                               │  config / lifecycle (cross-cutting)      │
//!                               └──────────────────────────────────────────┘
//! ```
//!
//! Every route is a direct proxy of one upstream HTTP call: no retries,
//! no caching, no shared mutable state beyond the read-only configuration.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod pages;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::UpstreamClient;
