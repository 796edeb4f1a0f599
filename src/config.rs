use std::env;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub anthropic_api_key: SecretString,
    pub anthropic_api_url: String,
    pub anthropic_model: String,
    pub max_tokens: u32,
    pub provider_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // An unset key is not an error here. The provider rejects the
            // request and the caller sees the generic 500.
            anthropic_api_key: SecretString::from(
                env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            ),
            anthropic_api_url: env::var("ANTHROPIC_API_URL")
                .unwrap_or_else(|_| "https://api.anthropic.com/v1/messages".to_string()),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string()),
            max_tokens: env::var("MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1500),
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            anthropic_api_key: SecretString::from("test_api_key".to_string()),
            anthropic_api_url: "http://localhost:9999/v1/messages".to_string(),
            anthropic_model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1500,
            provider_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
