pub mod completion_client;
pub mod quiz_service;
pub mod quiz_validator;

pub use completion_client::{AnthropicClient, CompletionClient};
pub use quiz_service::QuizService;
