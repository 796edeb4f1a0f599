use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::QuizRequest};

#[post("/")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate().map_err(|_| AppError::InvalidTopic)?;

    let quiz = state.quiz_service.generate_quiz(&request.topic).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// OPTIONS requests that are not CORS preflights (actix-cors answers those
/// before routing) still get an empty 200.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}
