// Document generation
// Builds prompts from the session's profile and runs them through llm_client.
// All model calls go through llm_client; nothing here talks HTTP directly.

pub mod builder;
pub mod handlers;
pub mod prompts;
