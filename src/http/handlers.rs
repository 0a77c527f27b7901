//! Route handlers for the gateway.
//!
//! Each handler issues at most one upstream call and translates the
//! outcome: success renders a page or redirects back to the list view,
//! failure flows through [`GatewayError`] into a JSON error body.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::http::response::GatewayError;
use crate::http::server::AppState;
use crate::pages::{AboutPage, IndexPage, ModalitiesPage, StatusPage};
use crate::upstream::ModalityBody;

/// Form fields for creating a modality.
///
/// The port arrives as a string; integer parsing is the only local
/// validation, everything else is the upstream's to enforce.
#[derive(Debug, Deserialize)]
pub struct AddModalityForm {
    pub name: String,
    pub aet: String,
    pub host: String,
    pub port: String,
}

/// GET / — static landing page.
pub async fn index() -> Result<Html<String>, GatewayError> {
    Ok(Html(IndexPage.render()?))
}

/// GET /about — static project page.
pub async fn about() -> Result<Html<String>, GatewayError> {
    Ok(Html(AboutPage.render()?))
}

/// GET /modalities — list the modalities registered upstream.
pub async fn list_modalities(State(state): State<AppState>) -> Result<Html<String>, GatewayError> {
    let modalities = state.upstream.list_modalities().await?;
    Ok(Html(ModalitiesPage { modalities }.render()?))
}

/// POST /modalities/add — register a modality, then bounce to the list.
pub async fn add_modality(
    State(state): State<AppState>,
    Form(form): Form<AddModalityForm>,
) -> Result<Response, GatewayError> {
    let port: u16 = form
        .port
        .trim()
        .parse()
        .map_err(|e| GatewayError::Internal(format!("invalid port '{}': {}", form.port, e)))?;

    let body = ModalityBody {
        aet: form.aet,
        host: form.host,
        port,
    };
    state.upstream.put_modality(&form.name, &body).await?;

    tracing::info!(name = %form.name, "Modality registered");
    Ok(redirect_to_modalities())
}

/// POST /modalities/delete/{name} — remove a modality, then bounce to the list.
pub async fn delete_modality(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, GatewayError> {
    state.upstream.delete_modality(&name).await?;

    tracing::info!(name = %name, "Modality removed");
    Ok(redirect_to_modalities())
}

/// GET /status — render the upstream system map as-is.
pub async fn server_status(State(state): State<AppState>) -> Result<Html<String>, GatewayError> {
    let status = state.upstream.system_status().await?;
    let entries = status
        .iter()
        .map(|(key, value)| (key.clone(), display_value(value)))
        .collect();
    Ok(Html(StatusPage { entries }.render()?))
}

/// GET /static/gateway.js — delete-confirmation script for the modalities page.
pub async fn gateway_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/gateway.js"),
    )
}

/// 302 to the list view, the browser-facing success for both mutations.
fn redirect_to_modalities() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/modalities")]).into_response()
}

/// Strings render bare; everything else keeps its JSON notation.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_value_unquotes_strings() {
        assert_eq!(display_value(&json!("ORTHANC")), "ORTHANC");
        assert_eq!(display_value(&json!(23)), "23");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn redirect_targets_list_view() {
        let response = redirect_to_modalities();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/modalities"
        );
    }
}
