use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    safety::TopicFilter,
    services::{AnthropicClient, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Arc::new(AnthropicClient::new(config)?);
        let quiz_service = Arc::new(QuizService::new(client, TopicFilter::default()));

        Ok(Self { quiz_service })
    }
}
