pub mod quiz_handler;

pub use quiz_handler::{generate_quiz, method_not_allowed, preflight};

use actix_cors::Cors;
use actix_web::{http::header, http::Method, web};

use crate::errors::AppError;

/// Route table: quiz generation on POST /, a bare-OPTIONS route for
/// non-preflight OPTIONS requests, and 405 for everything else.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(quiz_handler::generate_quiz)
        .route("/", web::method(Method::OPTIONS).to(quiz_handler::preflight))
        .default_service(web::route().to(quiz_handler::method_not_allowed));
}

/// CORS policy carried on every response: any origin (wildcard), JSON bodies
/// only, POST plus preflight.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE])
}

/// A body that fails JSON deserialization surfaces as the generic 500, the
/// same catch-all boundary any other unexpected fault hits.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InternalError(err.to_string()).into())
}
