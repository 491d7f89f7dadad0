//! HTTP surface: the builder form and the archive build endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use dealer_search_sdk::{build_search_archive, BuildError, Inventory};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

const INDEX_HTML: &str = include_str!("page.html");

/// Builds are never cached; every request regenerates from current inventory.
const CACHE_CONTROL_NO_STORE: &str = "no-store";

// ================================================================================================
// Error Codes
// ================================================================================================

pub mod error_code {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INVENTORY_UNAVAILABLE: &str = "INVENTORY_UNAVAILABLE";
    pub const ARCHIVE_FAILED: &str = "ARCHIVE_FAILED";
}

/// Request failures, rendered as `{"code": ..., "message": ...}`
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body is not the expected JSON shape. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// The inventory provider failed. HTTP 502.
    #[error("{0}")]
    InventoryUnavailable(String),

    /// The archive could not be produced. HTTP 500.
    #[error("{0}")]
    ArchiveFailed(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => error_code::VALIDATION_FAILED,
            ApiError::InventoryUnavailable(_) => error_code::INVENTORY_UNAVAILABLE,
            ApiError::ArchiveFailed(_) => error_code::ARCHIVE_FAILED,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InventoryUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::ArchiveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BuildError> for ApiError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Inventory(e) => ApiError::InventoryUnavailable(e.to_string()),
            BuildError::Archive(e) => ApiError::ArchiveFailed(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(format!("Invalid build request: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

// ================================================================================================
// Routes
// ================================================================================================

/// Shared, read-only state for every request
pub struct AppState {
    pub inventory: Inventory,
    pub campaign_name: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/build", post(build))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildRequest {
    #[serde(default)]
    dealership_url: Option<String>,
}

async fn build(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Parsed by hand so the request's Content-Type is not enforced
    let req: BuildRequest = serde_json::from_slice(&body)
        .inspect_err(|e| warn!("Rejected build request: {}", e))?;
    let dealership_url = req.dealership_url.unwrap_or_default();
    info!(
        "Build requested for '{}' ({} inventory)",
        dealership_url,
        state.inventory.kind()
    );

    let built = build_search_archive(&state.inventory, &dealership_url, &state.campaign_name)
        .await
        .inspect_err(|e| warn!("Build failed for '{}': {}", dealership_url, e))?;

    let headers = [
        (header::CONTENT_TYPE, built.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", built.file_name),
        ),
        (header::CACHE_CONTROL, CACHE_CONTROL_NO_STORE.to_string()),
    ];
    Ok((StatusCode::OK, headers, built.bytes).into_response())
}
