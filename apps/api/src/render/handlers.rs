//! Axum route handlers for PDF export and the portfolio site.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::archive::{build_archive, list_entries, ARCHIVE_FILENAME};
use crate::render::pdf::{render_pdf, DocumentKind};
use crate::render::portfolio::{readme, render_portfolio, PortfolioConfig};
use crate::sessions::handlers::load_session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: DocumentKind,
}

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

/// Profile-derived portfolio config with the session's layout, then any
/// top-level keys from the request body laid over it.
async fn portfolio_config(
    state: &AppState,
    id: Uuid,
    overrides: Option<Value>,
) -> Result<PortfolioConfig, AppError> {
    let session = load_session(state, id).await?;
    let mut config = PortfolioConfig::from_profile(&session.profile);
    config.layout = session.portfolio_layout;

    let Some(Value::Object(overrides)) = overrides else {
        return Ok(config);
    };

    let mut merged = serde_json::to_value(&config)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("portfolio config encode: {e}")))?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }
    serde_json::from_value(merged)
        .map_err(|e| AppError::Validation(format!("Invalid portfolio settings: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/pdf
///
/// Renders generated text to a PDF download named after the author.
pub async fn handle_render_pdf(
    Json(request): Json<PdfRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let bytes = render_pdf(&request.text, &request.name, request.kind).map_err(|e| {
        warn!(
            fallback = %request.kind.markdown_filename(&request.name),
            "PDF rendering failed; markdown download remains available"
        );
        e
    })?;
    let filename = request.kind.filename(&request.name);
    info!(filename = %filename, bytes = bytes.len(), "PDF rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, attachment(&filename)),
        ],
        bytes,
    ))
}

/// POST /api/v1/sessions/:id/portfolio
///
/// Body (optional) holds design overrides, e.g. `{"theme":"light"}`.
pub async fn handle_render_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    overrides: Option<Json<Value>>,
) -> Result<Html<String>, AppError> {
    let config = portfolio_config(&state, id, overrides.map(|Json(v)| v)).await?;
    let html = render_portfolio(&config);
    info!(
        session_id = %id,
        layout = config.layout.display_name(),
        bytes = html.len(),
        "Portfolio rendered"
    );
    Ok(Html(html))
}

/// POST /api/v1/sessions/:id/portfolio/archive
///
/// Same input as the HTML preview; returns `index.html` + `README.md` as tar.gz.
pub async fn handle_portfolio_archive(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    overrides: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let config = portfolio_config(&state, id, overrides.map(|Json(v)| v)).await?;
    let html = render_portfolio(&config);
    let readme = readme(&config.name, config.theme, config.layout);
    let bytes = build_archive(&html, &readme)?;

    info!(
        session_id = %id,
        entries = ?list_entries(&bytes)?,
        bytes = bytes.len(),
        "Portfolio archive built"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/gzip".to_string()),
            (header::CONTENT_DISPOSITION, attachment(ARCHIVE_FILENAME)),
        ],
        bytes,
    ))
}
