//! Authenticated client for the Orthanc REST API.
//!
//! # Responsibilities
//! - Build requests against the configured base URL
//! - Attach basic-auth credentials to every call
//! - Classify failures (transport, upstream HTTP status, decode)
//!
//! # Design Decisions
//! - One upstream call per operation, no retries and no caching
//! - No request timeout beyond the HTTP client's defaults
//! - Only upstream 200 counts as success for PUT/DELETE; anything
//!   else is surfaced with the upstream status and raw body

use reqwest::{Response, StatusCode};

use crate::config::UpstreamConfig;
use crate::upstream::types::{Modality, ModalityBody, SystemStatus, UpstreamError};

/// Client for the upstream Orthanc server.
#[derive(Clone)]
pub struct UpstreamClient {
    /// Shared reqwest client (connection pool).
    http: reqwest::Client,
    /// Base URL without a trailing slash.
    base: String,
    /// Basic-auth username.
    username: String,
    /// Basic-auth password.
    password: String,
}

impl UpstreamClient {
    /// Create a new client from validated configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// List every modality registered on the upstream server.
    ///
    /// GET `{base}/modalities/`. A non-success status propagates the
    /// upstream code; an undecodable body is a [`UpstreamError::Decode`].
    pub async fn list_modalities(&self) -> Result<Vec<Modality>, UpstreamError> {
        let response = self
            .http
            .get(self.endpoint("modalities/"))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let response = Self::require_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(UpstreamError::Decode)
    }

    /// Register (or overwrite) a modality under `name`.
    ///
    /// PUT `{base}/modalities/{name}` with the upstream's JSON body shape.
    pub async fn put_modality(
        &self,
        name: &str,
        body: &ModalityBody,
    ) -> Result<(), UpstreamError> {
        let response = self
            .http
            .put(self.endpoint(&format!("modalities/{}", name)))
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;

        Self::require_ok(response).await
    }

    /// Remove the modality named `name`.
    pub async fn delete_modality(&self, name: &str) -> Result<(), UpstreamError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("modalities/{}", name)))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        Self::require_ok(response).await
    }

    /// Fetch the upstream system information map.
    ///
    /// GET `{base}/system`. The status line is not inspected: any body
    /// that fails to decode as a JSON object is reported as malformed,
    /// mirroring the pass-through nature of the status page.
    pub async fn system_status(&self) -> Result<SystemStatus, UpstreamError> {
        let response = self
            .http
            .get(self.endpoint("system"))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(UpstreamError::Decode)
    }

    /// Surface any non-success status as an HTTP error with the raw body.
    async fn require_success(response: Response) -> Result<Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await?;
            Err(UpstreamError::Http { status, body })
        }
    }

    /// Exactly 200 counts as success for mutations.
    async fn require_ok(response: Response) -> Result<(), UpstreamError> {
        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            let body = response.text().await?;
            Err(UpstreamError::Http { status, body })
        }
    }
}
