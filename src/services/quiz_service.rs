use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::quiz_prompt::quiz_prompt,
    errors::{AppError, AppResult},
    safety::TopicFilter,
    services::completion_client::CompletionClient,
    services::quiz_validator::{extract_json, validate_quiz},
};

/// Runs the generation pipeline for one validated topic: safety filter,
/// prompt, provider call, JSON extraction, shape validation.
pub struct QuizService {
    client: Arc<dyn CompletionClient>,
    filter: TopicFilter,
}

impl QuizService {
    pub fn new(client: Arc<dyn CompletionClient>, filter: TopicFilter) -> Self {
        Self { client, filter }
    }

    /// The returned value is the provider's quiz object verbatim, so field
    /// order and any extra fields it sent pass through untouched.
    pub async fn generate_quiz(&self, topic: &str) -> AppResult<Value> {
        if self.filter.is_blocked(topic) {
            log::warn!("rejected blocked topic");
            return Err(AppError::TopicBlocked);
        }

        let raw = self.client.complete(&quiz_prompt(topic)).await?;
        let quiz = extract_json(&raw)?;
        validate_quiz(&quiz)?;

        Ok(quiz)
    }
}
