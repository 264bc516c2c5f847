//! Admin Markdown preview endpoint.
//!
//! Uses the same renderer and sanitizer as the public pages, so a
//! preview always matches what the site will publish. Accepts JSON or
//! form-encoded bodies because the admin form posts both ways.

use axum::extract::{Form, FromRequest, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::richtext::{render_md_block, render_md_inline};

const PREVIEW_TOKEN_HEADER: &str = "x-preview-token";

#[derive(Debug, Deserialize)]
pub struct PreviewPayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub enabled: bool,
    pub html: String,
}

/// Renders a Markdown preview for the admin form.
///
/// Responds 403 when a preview token is configured and missing from the
/// request, `{"enabled": false}` when rendering is disabled, and 400 on
/// an unknown mode. Mode defaults to "block".
pub async fn richtext_preview(State(state): State<AppState>, request: Request) -> Response {
    if let Some(expected) = state.preview_token() {
        let provided = request
            .headers()
            .get(PREVIEW_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            return (StatusCode::FORBIDDEN, "Forbidden").into_response();
        }
    }

    if !state.richtext_enabled() {
        return Json(PreviewResponse {
            enabled: false,
            html: String::new(),
        })
        .into_response();
    }

    let payload = match parse_payload(request).await {
        Ok(payload) => payload,
        Err(response) => return response,
    };

    let mode = payload
        .mode
        .as_deref()
        .map(|mode| mode.trim().to_ascii_lowercase())
        .filter(|mode| !mode.is_empty())
        .unwrap_or_else(|| "block".to_string());

    let html = match mode.as_str() {
        "block" => render_md_block(&payload.text),
        "inline" => render_md_inline(&payload.text),
        _ => return (StatusCode::BAD_REQUEST, "Invalid mode").into_response(),
    };

    Json(PreviewResponse {
        enabled: true,
        html,
    })
    .into_response()
}

async fn parse_payload(request: Request) -> Result<PreviewPayload, Response> {
    let is_json = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("application/json"));

    if is_json {
        match Json::<PreviewPayload>::from_request(request, &()).await {
            Ok(Json(payload)) => Ok(payload),
            Err(_) => Err((StatusCode::BAD_REQUEST, "Malformed request body").into_response()),
        }
    } else {
        match Form::<PreviewPayload>::from_request(request, &()).await {
            Ok(Form(payload)) => Ok(payload),
            Err(_) => Err((StatusCode::BAD_REQUEST, "Malformed request body").into_response()),
        }
    }
}
