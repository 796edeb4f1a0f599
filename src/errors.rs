use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid topic")]
    InvalidTopic,

    #[error("Topic not allowed")]
    TopicBlocked,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Completion provider error: {0}")]
    ProviderUnavailable(String),

    #[error("Completion provider timed out")]
    ProviderTimeout,

    #[error("Could not parse quiz from model output: {0}")]
    QuizParse(String),

    #[error("Model returned a quiz without exactly 5 questions")]
    InvalidQuizShape,

    #[error("Model returned a malformed question")]
    InvalidQuestionShape,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Fixed message returned to the caller. Provider status codes, raw model
    /// output and other internals stay in the server log.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::InvalidTopic => "Invalid topic",
            AppError::TopicBlocked => "Topic not allowed",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::ProviderUnavailable(_) | AppError::ProviderTimeout => {
                "Failed to generate quiz"
            }
            AppError::QuizParse(_) => "Failed to parse quiz",
            AppError::InvalidQuizShape => "Invalid quiz format",
            AppError::InvalidQuestionShape => "Invalid question format",
            AppError::InternalError(_) => "Internal server error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidTopic | AppError::TopicBlocked => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ProviderUnavailable(_)
            | AppError::ProviderTimeout
            | AppError::QuizParse(_)
            | AppError::InvalidQuizShape
            | AppError::InvalidQuestionShape
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.client_message().to_string(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ProviderTimeout
        } else {
            AppError::ProviderUnavailable(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
