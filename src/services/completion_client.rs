use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::ANTHROPIC_VERSION,
    errors::{AppError, AppResult},
};

/// Seam between quiz generation and the remote model. Implementors own
/// transport and vendor details; callers only see prompt in, text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

/// Anthropic Messages API client. One best-effort request per call; retry
/// policy is out of scope for an interactive endpoint.
pub struct AnthropicClient {
    http: reqwest::Client,
    api_url: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .build()
            .map_err(|err| AppError::InternalError(err.to_string()))?;

        Ok(Self {
            http,
            api_url: config.anthropic_api_url.clone(),
            api_key: config.anthropic_api_key.clone(),
            model: config.anthropic_model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        log::debug!("requesting completion from model {}", self.model);

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ProviderUnavailable(format!(
                "completion endpoint returned {}",
                status
            )));
        }

        let data: MessagesResponse = response.json().await?;
        let block = data
            .content
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ProviderUnavailable("empty content array".to_string()))?;

        Ok(block.text)
    }
}
