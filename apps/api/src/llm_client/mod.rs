//! LLM client: the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call the generation API directly.
//! All LLM interactions MUST go through `LlmClient::generate`.
//!
//! The remote service sits behind the `TextGenerator` trait so the retry and
//! failure-classification rules can be exercised without the network.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod gemini;
pub mod prompts;
pub mod retry;

use retry::{Attempt, RetryError, RetryPolicy};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Default attempt budget for a single user action.
pub const DEFAULT_RETRIES: u32 = 3;
/// Fixed wait between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;

/// Harm categories sent with every call, all at the most permissive threshold.
pub const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
pub const SAFETY_THRESHOLD: &str = "BLOCK_NONE";

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Raw failure reported by a backend. Its `Display` text is what gets classified.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Classified outcome of a generation call that produced no usable text.
/// The `Display` impl is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    #[error("⚠️ API quota exceeded. Please try again later.")]
    QuotaExceeded,

    #[error("⚠️ Invalid API key. Please check your GEMINI_API_KEY.")]
    InvalidCredential,

    #[error("⚠️ Error: {last_error}")]
    Transient { last_error: String },

    #[error("I apologize, but I couldn't generate content at this moment. Please try again.")]
    Empty,

    #[error("Unable to generate content. Please try again.")]
    NoAttempts,
}

impl GenerationFailure {
    /// Maps raw backend error text to a failure class.
    /// `quota` wins over `invalid`; anything else is transient.
    pub fn classify(error_text: &str) -> Self {
        let lowered = error_text.to_lowercase();
        if lowered.contains("quota") {
            GenerationFailure::QuotaExceeded
        } else if lowered.contains("invalid") {
            GenerationFailure::InvalidCredential
        } else {
            GenerationFailure::Transient {
                last_error: error_text.to_string(),
            }
        }
    }

    /// Whether another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationFailure::Transient { .. } | GenerationFailure::Empty
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / response model
// ────────────────────────────────────────────────────────────────────────────

/// One user action's worth of generation: built fresh, consumed once.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_output_tokens: u32,
    pub retries: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens,
            retries: DEFAULT_RETRIES,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

/// Fixed sampling parameters plus the per-request output budget.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub fn with_max_output_tokens(max_output_tokens: u32) -> Self {
        Self {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Builds a single-candidate response, mostly useful for fakes.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_candidates(vec![vec![text.into()]])
    }

    /// Builds a response with one candidate per inner list of text parts.
    pub fn from_candidates(candidates: Vec<Vec<String>>) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|parts| Candidate {
                    content: Some(Content {
                        parts: parts.into_iter().map(|t| Part { text: Some(t) }).collect(),
                    }),
                })
                .collect(),
        }
    }

    /// The primary text: every part of the first candidate, concatenated.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Fallback extraction: every non-empty fragment of every candidate, space-joined.
    pub fn fragments_text(&self) -> Option<String> {
        let fragments: Vec<&str> = self
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect();
        let joined = fragments.join(" ");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Primary text when present, otherwise the fragment fallback. Trimmed.
    pub fn extract_text(&self) -> Option<String> {
        self.text()
            .map(|t| t.trim().to_string())
            .or_else(|| self.fragments_text())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend trait
// ────────────────────────────────────────────────────────────────────────────

/// A remote text-generation service. Implement this to swap providers without
/// touching the retry policy or any caller.
///
/// Carried in `LlmClient` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerateContentResponse, BackendError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by all operations.
/// Wraps a `TextGenerator` with the retry policy and failure classification.
#[derive(Clone)]
pub struct LlmClient {
    backend: Arc<dyn TextGenerator>,
    retry_delay: Duration,
}

impl LlmClient {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Runs one generation request to completion.
    ///
    /// Non-blank text is returned trimmed. Quota and credential errors stop
    /// immediately; empty responses and other errors are retried after a fixed
    /// delay until `request.retries` attempts have been made.
    pub async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationFailure> {
        let policy = RetryPolicy::fixed(request.retries, self.retry_delay);
        let config = GenerationConfig::with_max_output_tokens(request.max_output_tokens);
        let config = &config;
        let backend = self.backend.as_ref();
        let prompt = request.prompt.as_str();

        let outcome = retry::run(&policy, |attempt| async move {
            match backend.generate_content(prompt, config).await {
                Ok(response) => match response.extract_text() {
                    Some(text) => {
                        debug!(attempt, chars = text.len(), "Generation succeeded");
                        Attempt::Done(text)
                    }
                    None => {
                        warn!(attempt, "Generation returned no text");
                        Attempt::Retry(GenerationFailure::Empty)
                    }
                },
                Err(e) => {
                    let failure = GenerationFailure::classify(&e.to_string());
                    if failure.is_retryable() {
                        warn!(attempt, "Generation call failed: {e}");
                        Attempt::Retry(failure)
                    } else {
                        warn!(attempt, "Generation call failed permanently: {e}");
                        Attempt::Abort(failure)
                    }
                }
            }
        })
        .await;

        outcome.map_err(|e| match e {
            RetryError::Aborted(failure) | RetryError::Exhausted(failure) => failure,
            RetryError::NoAttempts => GenerationFailure::NoAttempts,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Scripted backend: pops one outcome per call, repeating `fallback` once drained.
    pub struct ScriptedBackend {
        script: Mutex<VecDeque<Result<GenerateContentResponse, String>>>,
        fallback: Result<GenerateContentResponse, String>,
        pub calls: AtomicU32,
        pub last_config: Mutex<Option<GenerationConfig>>,
    }

    impl ScriptedBackend {
        pub fn new(
            script: Vec<Result<GenerateContentResponse, String>>,
            fallback: Result<GenerateContentResponse, String>,
        ) -> Self {
            Self {
                script: Mutex::new(script.into()),
                fallback,
                calls: AtomicU32::new(0),
                last_config: Mutex::new(None),
            }
        }

        pub fn always(outcome: Result<GenerateContentResponse, String>) -> Self {
            Self::new(Vec::new(), outcome)
        }

        pub fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedBackend {
        async fn generate_content(
            &self,
            _prompt: &str,
            config: &GenerationConfig,
        ) -> Result<GenerateContentResponse, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_config.lock().unwrap() = Some(config.clone());
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone());
            next.map_err(|message| BackendError::Api {
                status: 500,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedBackend;
    use super::*;

    fn client(backend: Arc<ScriptedBackend>) -> LlmClient {
        LlmClient::new(backend)
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_trimmed_text_on_first_attempt() {
        let backend = Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::from_text("  # Resume\n"),
        )));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100))
            .await;
        assert_eq!(result, Ok("# Resume".to_string()));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sends_fixed_sampling_parameters() {
        let backend = Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::from_text("ok"),
        )));
        client(backend.clone())
            .generate(GenerationRequest::new("prompt", 3500))
            .await
            .unwrap();
        let config = backend.last_config.lock().unwrap().clone().unwrap();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.top_k, 40);
        assert_eq!(config.max_output_tokens, 3500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quota_error_short_circuits_on_first_attempt() {
        let backend = Arc::new(ScriptedBackend::always(Err(
            "429 Resource exhausted: check QUOTA".to_string(),
        )));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100).with_retries(5))
            .await;
        assert_eq!(result, Err(GenerationFailure::QuotaExceeded));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_key_short_circuits() {
        let backend = Arc::new(ScriptedBackend::always(Err(
            "INVALID_ARGUMENT: API key not valid".to_string(),
        )));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100))
            .await;
        assert_eq!(result, Err(GenerationFailure::InvalidCredential));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_errors_exhaust_budget_with_last_error() {
        let backend = Arc::new(ScriptedBackend::new(
            vec![
                Err("connection reset".to_string()),
                Err("upstream timeout".to_string()),
            ],
            Err("service unavailable".to_string()),
        ));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100).with_retries(4))
            .await;
        assert_eq!(backend.call_count(), 4);
        let failure = result.unwrap_err();
        assert_eq!(
            failure.to_string(),
            "⚠️ Error: API error (status 500): service unavailable"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_fixed_delay_between_attempts() {
        let backend = Arc::new(ScriptedBackend::always(Err("boom".to_string())));
        let started = tokio::time::Instant::now();
        let _ = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100).with_retries(3))
            .await;
        // two waits between three attempts
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_responses_are_retried_then_reported() {
        let backend = Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::default(),
        )));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100))
            .await;
        assert_eq!(result, Err(GenerationFailure::Empty));
        assert_eq!(backend.call_count(), DEFAULT_RETRIES);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failure() {
        let backend = Arc::new(ScriptedBackend::new(
            vec![Err("flaky".to_string())],
            Ok(GenerateContentResponse::from_text("done")),
        ));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100))
            .await;
        assert_eq!(result, Ok("done".to_string()));
        assert_eq!(backend.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_retries_never_calls_backend() {
        let backend = Arc::new(ScriptedBackend::always(Ok(
            GenerateContentResponse::from_text("unused"),
        )));
        let result = client(backend.clone())
            .generate(GenerationRequest::new("prompt", 100).with_retries(0))
            .await;
        assert_eq!(result, Err(GenerationFailure::NoAttempts));
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_fragment_fallback_joins_all_candidates() {
        let response = GenerateContentResponse::from_candidates(vec![
            vec![],
            vec!["first".to_string(), "second".to_string()],
            vec!["third".to_string()],
        ]);
        assert_eq!(response.text(), None);
        assert_eq!(
            response.extract_text(),
            Some("first second third".to_string())
        );
    }

    #[test]
    fn test_primary_text_concatenates_first_candidate_parts() {
        let response = GenerateContentResponse::from_candidates(vec![vec![
            "Hello, ".to_string(),
            "world".to_string(),
        ]]);
        assert_eq!(response.extract_text(), Some("Hello, world".to_string()));
    }

    #[test]
    fn test_classify_is_case_insensitive_and_quota_first() {
        assert_eq!(
            GenerationFailure::classify("Quota and Invalid"),
            GenerationFailure::QuotaExceeded
        );
        assert_eq!(
            GenerationFailure::classify("INVALID key"),
            GenerationFailure::InvalidCredential
        );
        assert!(GenerationFailure::classify("reset by peer").is_retryable());
    }
}
