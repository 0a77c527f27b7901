//! Wire types and errors for the Orthanc REST API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A DICOM modality as listed by the upstream server.
///
/// The upstream spells network fields `AET`/`Host`/`Port`; lowercase
/// spellings are accepted too, and absent fields default so that a
/// name-only listing still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Modality {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(rename = "AET", alias = "aet", default)]
    pub aet: String,

    #[serde(rename = "Host", alias = "host", default)]
    pub host: String,

    #[serde(rename = "Port", alias = "port", default)]
    pub port: u16,
}

/// Body of a modality PUT, exactly as the upstream expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityBody {
    #[serde(rename = "AET")]
    pub aet: String,

    #[serde(rename = "Host")]
    pub host: String,

    #[serde(rename = "Port")]
    pub port: u16,
}

/// Opaque key-value map returned by the upstream `/system` endpoint.
///
/// Passed through unmodified for display; the gateway gives no meaning
/// to individual keys.
pub type SystemStatus = serde_json::Map<String, serde_json::Value>;

/// Error type for upstream calls.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection or transport-level failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Response body did not match the expected JSON shape.
    #[error("invalid upstream response: {0}")]
    Decode(#[source] serde_json::Error),
}
