//! Axum route handlers for sessions and the profile store.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::completeness::compute_completeness_report;
use crate::profile::{self, CandidateProfile, CompletenessReport};
use crate::sessions::Session;
use crate::state::AppState;
use crate::templates::{PortfolioLayout, ResumeStyle};

pub const PROFILE_EXPORT_FILENAME: &str = "my_profile.json";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: Session,
    pub completeness: CompletenessReport,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let completeness = compute_completeness_report(&session.profile);
        Self {
            session,
            completeness,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectTemplatesRequest {
    pub resume_style: Option<ResumeStyle>,
    pub portfolio_layout: Option<PortfolioLayout>,
}

/// Loads a session or fails with 404.
pub async fn load_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    info!(session_id = %session.id, "Session started");
    (StatusCode::CREATED, Json(session.into()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Json(session.into()))
}

/// DELETE /api/v1/sessions/:id
///
/// Ends the session and drops its profile.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!(session_id = %id, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/profile
///
/// Replaces the whole profile; fields left out of the body become empty.
pub async fn handle_replace_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .replace_profile(id, profile)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(session.into()))
}

/// PUT /api/v1/sessions/:id/templates
pub async fn handle_select_templates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectTemplatesRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .select_templates(id, request.resume_style, request.portfolio_layout)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(session.into()))
}

/// GET /api/v1/sessions/:id/profile/export
///
/// Pretty-printed profile JSON as a file download.
pub async fn handle_export_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = load_session(&state, id).await?;
    let text = profile::serialize(&session.profile)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PROFILE_EXPORT_FILENAME}\""),
            ),
        ],
        text,
    ))
}

/// POST /api/v1/sessions/:id/profile/import
///
/// Body is the raw JSON text of a previous export. Malformed input loads an
/// empty profile rather than failing.
pub async fn handle_import_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: String,
) -> Result<Json<SessionResponse>, AppError> {
    let profile = profile::deserialize(&body);
    let session = state
        .sessions
        .replace_profile(id, profile)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    info!(session_id = %id, "Profile imported");
    Ok(Json(session.into()))
}

/// POST /api/v1/profile/completeness
///
/// Scores a profile without touching any session.
pub async fn handle_completeness(
    Json(profile): Json<CandidateProfile>,
) -> Json<CompletenessReport> {
    Json(compute_completeness_report(&profile))
}
