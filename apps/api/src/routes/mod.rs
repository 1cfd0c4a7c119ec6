pub mod health;
pub mod templates;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::sessions::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(templates::templates_handler))
        // Sessions & profile store
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            put(sessions::handle_replace_profile),
        )
        .route(
            "/api/v1/sessions/:id/templates",
            put(sessions::handle_select_templates),
        )
        .route(
            "/api/v1/sessions/:id/profile/export",
            get(sessions::handle_export_profile),
        )
        .route(
            "/api/v1/sessions/:id/profile/import",
            post(sessions::handle_import_profile),
        )
        .route(
            "/api/v1/profile/completeness",
            post(sessions::handle_completeness),
        )
        // Generation
        .route(
            "/api/v1/sessions/:id/resume",
            post(generation::handle_generate_resume),
        )
        .route(
            "/api/v1/sessions/:id/cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/sessions/:id/advice",
            post(generation::handle_career_advice),
        )
        // Rendering
        .route("/api/v1/documents/pdf", post(render::handle_render_pdf))
        .route(
            "/api/v1/sessions/:id/portfolio",
            post(render::handle_render_portfolio),
        )
        .route(
            "/api/v1/sessions/:id/portfolio/archive",
            post(render::handle_portfolio_archive),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::ScriptedBackend;
    use crate::llm_client::{GenerateContentResponse, LlmClient};
    use crate::profile::sample_profile;
    use crate::render::archive::list_entries;
    use crate::sessions::SessionStore;

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "test-model".to_string(),
            gemini_base_url: "http://localhost".to_string(),
            generation_retries: 3,
            retry_delay_ms: 0,
            session_idle_ttl_secs: 3600,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app_with(backend: Arc<ScriptedBackend>) -> Router {
        build_router(AppState {
            llm: LlmClient::new(backend).with_retry_delay(Duration::ZERO),
            config: test_config(),
            sessions: SessionStore::new(),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::from_text("# Ada Lovelace\n## EXPERIENCE\n- Wrote code"),
        ))))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn create_session(app: &Router) -> String {
        let response = send(app, empty_request("POST", "/api/v1/sessions")).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["session"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn session_with_profile(app: &Router) -> String {
        let id = create_session(app).await;
        let profile = serde_json::to_value(sample_profile()).unwrap();
        let response = send(
            app,
            json_request("PUT", &format!("/api/v1/sessions/{id}/profile"), profile),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        id
    }

    // ── Service ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health() {
        let response = send(&app(), empty_request("GET", "/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-builder-api");
    }

    #[tokio::test]
    async fn test_templates_catalogue() {
        let response = send(&app(), empty_request("GET", "/api/v1/templates")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["resume_styles"].as_array().unwrap().len(), 8);
        assert_eq!(body["portfolio_layouts"].as_array().unwrap().len(), 4);
        assert_eq!(body["skill_presets"][0]["id"], "software_engineer");
        assert_eq!(body["achievement_presets"].as_array().unwrap().len(), 5);
        assert_eq!(body["advice_presets"][2]["name"], "Profile Review");
    }

    // ── Sessions ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let app = app();
        let id = create_session(&app).await;
        let response = send(&app, empty_request("GET", &format!("/api/v1/sessions/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["completeness"]["score"], 0);
        assert_eq!(body["session"]["resume_style"], "modern_professional");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let uri = format!("/api/v1/sessions/{}", uuid::Uuid::new_v4());
        let response = send(&app(), empty_request("GET", &uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_deleted_session_is_gone() {
        let app = app();
        let id = create_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}");

        let response = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_full_profile_scores_100() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(&app, empty_request("GET", &format!("/api/v1/sessions/{id}"))).await;
        assert_eq!(body_json(response).await["completeness"]["score"], 100);
    }

    #[tokio::test]
    async fn test_select_templates() {
        let app = app();
        let id = create_session(&app).await;
        let response = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/sessions/{id}/templates"),
                json!({ "portfolio_layout": "terminal" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["session"]["portfolio_layout"], "terminal");
        assert_eq!(body["session"]["resume_style"], "modern_professional");
    }

    #[tokio::test]
    async fn test_export_then_import_round_trips() {
        let app = app();
        let source = session_with_profile(&app).await;
        let response = send(
            &app,
            empty_request("GET", &format!("/api/v1/sessions/{source}/profile/export")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"my_profile.json\""
        );
        let exported = body_bytes(response).await;

        let target = create_session(&app).await;
        let response = send(
            &app,
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/sessions/{target}/profile/import"))
                .body(Body::from(exported))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["session"]["profile"]["name"], "Ada Lovelace");
        assert_eq!(body["completeness"]["score"], 100);
    }

    #[tokio::test]
    async fn test_import_malformed_json_loads_empty_profile() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(
            &app,
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/sessions/{id}/profile/import"))
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["session"]["profile"]["name"], "");
        assert_eq!(body["completeness"]["score"], 0);
    }

    #[tokio::test]
    async fn test_stateless_completeness() {
        let response = send(
            &app(),
            json_request(
                "POST",
                "/api/v1/profile/completeness",
                json!({ "name": "Ada", "email": "ada@example.com" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // 2 of 6 required fields: 2 * 70 / 6 = 23.3
        assert_eq!(body["score"], 23);
    }

    // ── Generation ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_resume_requires_name_and_email() {
        let backend = Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::from_text("unused"),
        )));
        let app = app_with(backend.clone());
        let id = create_session(&app).await;

        let response = send(&app, empty_request("POST", &format!("/api/v1/sessions/{id}/resume"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_resume_generated_with_filenames() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(&app, empty_request("POST", &format!("/api/v1/sessions/{id}/resume"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["text"].as_str().unwrap().starts_with("# Ada Lovelace"));
        assert_eq!(body["markdown"], "# Ada Lovelace\n## EXPERIENCE\n- Wrote code");
        assert_eq!(body["pdf_filename"], "Ada_Lovelace_Resume.pdf");
        assert_eq!(body["markdown_filename"], "Ada_Lovelace_Resume.md");
        assert_eq!(body["style"], "modern_professional");
    }

    #[tokio::test]
    async fn test_quota_error_is_bad_gateway_after_one_call() {
        let backend = Arc::new(ScriptedBackend::always(Err(
            "429 RESOURCE_EXHAUSTED: Quota exceeded".to_string(),
        )));
        let app = app_with(backend.clone());
        let id = session_with_profile(&app).await;

        let response = send(&app, empty_request("POST", &format!("/api/v1/sessions/{id}/resume"))).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "⚠️ API quota exceeded. Please try again later."
        );
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cover_letter_requires_name_only() {
        let app = app();
        let id = create_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/cover-letter");

        let response = send(&app, json_request("POST", &uri, json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/sessions/{id}/profile"),
                json!({ "name": "Ada Lovelace" }),
            ),
        )
        .await;
        let response = send(
            &app,
            json_request("POST", &uri, json!({ "company": "Analytical Engines Ltd" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["pdf_filename"],
            "Ada_Lovelace_CoverLetter.pdf"
        );
    }

    #[tokio::test]
    async fn test_advice_rejects_blank_question() {
        let backend = Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::from_text("unused"),
        )));
        let app = app_with(backend.clone());
        let id = create_session(&app).await;
        let response = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/advice"),
                json!({ "question": "   " }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_advice_answers_question() {
        let app = app();
        let id = create_session(&app).await;
        let response = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/advice"),
                json!({ "question": " How do I move into ML? " }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["question"], "How do I move into ML?");
        assert!(!body["answer"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_advice_preset_uses_target_role() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/advice"),
                json!({ "preset": "learning_roadmap" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let question = body_json(response).await["question"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(question.contains("learning roadmap to become a Software Engineer."));
    }

    #[tokio::test]
    async fn test_typed_question_overrides_preset() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/advice"),
                json!({ "question": "Should I learn Go?", "preset": "interview_tips" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["question"], "Should I learn Go?");
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_pdf_download() {
        let response = send(
            &app(),
            json_request(
                "POST",
                "/api/v1/documents/pdf",
                json!({
                    "text": "# Ada Lovelace\n## EXPERIENCE\n- Wrote the first algorithm",
                    "name": "Ada Lovelace",
                    "kind": "resume"
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ada_Lovelace_Resume.pdf\""
        );
        assert!(body_bytes(response).await.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_pdf_rejects_empty_text() {
        let response = send(
            &app(),
            json_request("POST", "/api/v1/documents/pdf", json!({ "text": "  " })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_portfolio_uses_session_layout_and_overrides() {
        let app = app();
        let id = session_with_profile(&app).await;
        send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/sessions/{id}/templates"),
                json!({ "portfolio_layout": "terminal" }),
            ),
        )
        .await;

        let response = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/portfolio"),
                json!({ "theme": "light" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("about.sh"));
        assert!(html.contains(r#"data-theme="light">"#));
        assert!(!html.contains("themeToggle"));
    }

    #[tokio::test]
    async fn test_portfolio_without_body_defaults_to_toggle() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(
            &app,
            empty_request("POST", &format!("/api/v1/sessions/{id}/portfolio")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains(r#"id="themeToggle""#));
    }

    #[tokio::test]
    async fn test_portfolio_rejects_bad_override() {
        let app = app();
        let id = create_session(&app).await;
        let response = send(
            &app,
            json_request(
                "POST",
                &format!("/api/v1/sessions/{id}/portfolio"),
                json!({ "theme": "sepia" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_portfolio_archive_has_two_entries() {
        let app = app();
        let id = session_with_profile(&app).await;
        let response = send(
            &app,
            empty_request("POST", &format!("/api/v1/sessions/{id}/portfolio/archive")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"portfolio_website.tar.gz\""
        );
        let bytes = body_bytes(response).await;
        assert_eq!(list_entries(&bytes).unwrap(), vec!["index.html", "README.md"]);
    }
}
