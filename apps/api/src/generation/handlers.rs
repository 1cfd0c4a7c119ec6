//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::builder::{
    career_advice_prompt, cover_letter_prompt, resume_prompt, CoverLetterDetails,
    CAREER_ADVICE_MAX_TOKENS, COVER_LETTER_MAX_TOKENS, RESUME_MAX_TOKENS,
};
use crate::llm_client::GenerationRequest;
use crate::render::markdown::{blocks_to_markdown, classify_lines};
use crate::render::pdf::DocumentKind;
use crate::sessions::handlers::load_session;
use crate::state::AppState;
use crate::templates::{AdvicePreset, ResumeStyle};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either a free-text question or a preset; typed text wins when both are sent.
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub preset: Option<AdvicePreset>,
}

/// Generated text plus the filenames the client should offer for download.
#[derive(Debug, Serialize)]
pub struct GeneratedDocument {
    pub kind: &'static str,
    pub text: String,
    /// `text` normalized by the line classifier; body of the `.md` download.
    pub markdown: String,
    pub pdf_filename: String,
    pub markdown_filename: String,
}

impl GeneratedDocument {
    fn new(kind: DocumentKind, author_name: &str, text: String) -> Self {
        Self {
            kind: kind.title(),
            markdown: blocks_to_markdown(&classify_lines(&text)),
            text,
            pdf_filename: kind.filename(author_name),
            markdown_filename: kind.markdown_filename(author_name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub style: ResumeStyle,
    #[serde(flatten)]
    pub document: GeneratedDocument,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub question: String,
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/resume
///
/// Generates a markdown resume in the session's selected style.
/// Requires at least a name and an email on the profile.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let profile = &session.profile;

    if profile.name.trim().is_empty() || profile.email.trim().is_empty() {
        return Err(AppError::Validation(
            "Please fill in at least your name and email".to_string(),
        ));
    }

    let prompt = resume_prompt(session.resume_style, profile);
    let request = GenerationRequest::new(prompt, RESUME_MAX_TOKENS)
        .with_retries(state.config.generation_retries);
    let text = state.llm.generate(request).await?;

    info!(
        session_id = %id,
        style = session.resume_style.display_name(),
        chars = text.len(),
        "Resume generated"
    );

    Ok(Json(ResumeResponse {
        style: session.resume_style,
        document: GeneratedDocument::new(DocumentKind::Resume, &profile.name, text),
    }))
}

/// POST /api/v1/sessions/:id/cover-letter
///
/// Body carries the per-letter details; all fields are optional.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(details): Json<CoverLetterDetails>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let session = load_session(&state, id).await?;
    let profile = &session.profile;

    if profile.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Please complete your profile first".to_string(),
        ));
    }

    let prompt = cover_letter_prompt(profile, &details, Utc::now().date_naive());
    let request = GenerationRequest::new(prompt, COVER_LETTER_MAX_TOKENS)
        .with_retries(state.config.generation_retries);
    let text = state.llm.generate(request).await?;

    info!(session_id = %id, chars = text.len(), "Cover letter generated");

    Ok(Json(GeneratedDocument::new(
        DocumentKind::CoverLetter,
        &profile.name,
        text,
    )))
}

/// POST /api/v1/sessions/:id/advice
///
/// Answers one career question in the context of the session's profile.
pub async fn handle_career_advice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let typed = request.question.trim();
    if typed.is_empty() && request.preset.is_none() {
        return Err(AppError::Validation("Please enter a question".to_string()));
    }

    let session = load_session(&state, id).await?;
    let question = match request.preset {
        Some(preset) if typed.is_empty() => preset.question(&session.profile.target_role),
        _ => typed.to_string(),
    };
    let prompt = career_advice_prompt(&session.profile, &question);
    let generation = GenerationRequest::new(prompt, CAREER_ADVICE_MAX_TOKENS)
        .with_retries(state.config.generation_retries);
    let answer = state.llm.generate(generation).await?;

    info!(session_id = %id, chars = answer.len(), "Career advice generated");

    Ok(Json(AdviceResponse { question, answer }))
}
