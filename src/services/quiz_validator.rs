use serde_json::Value;

use crate::{
    constants::{OPTION_COUNT, QUESTION_COUNT},
    errors::{AppError, AppResult},
};

/// Pulls a JSON object out of free-form model text.
///
/// Best-effort brace-span heuristic: take the substring from the first `{`
/// to the last `}` and parse it, which strips markdown fences and surrounding
/// prose. If no span exists, parse the whole text verbatim. The raw text
/// travels with the error for server-side diagnosis.
pub fn extract_json(text: &str) -> AppResult<Value> {
    let candidate = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    };

    serde_json::from_str(candidate).map_err(|_| AppError::QuizParse(text.to_string()))
}

/// Checks a parsed quiz against the documented shape: exactly 5 questions,
/// each with a non-empty question text, exactly 4 options, and a numeric
/// `correct` index in [0,3]. Fails fast on the first bad question.
pub fn validate_quiz(quiz: &Value) -> AppResult<()> {
    let questions = quiz
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(AppError::InvalidQuizShape)?;

    if questions.len() != QUESTION_COUNT {
        return Err(AppError::InvalidQuizShape);
    }

    questions.iter().try_for_each(validate_question)
}

fn validate_question(question: &Value) -> AppResult<()> {
    let text = question.get("question").and_then(Value::as_str);
    if text.map_or(true, str::is_empty) {
        return Err(AppError::InvalidQuestionShape);
    }

    let options = question
        .get("options")
        .and_then(Value::as_array)
        .ok_or(AppError::InvalidQuestionShape)?;
    if options.len() != OPTION_COUNT {
        return Err(AppError::InvalidQuestionShape);
    }

    let correct = question
        .get("correct")
        .and_then(Value::as_f64)
        .ok_or(AppError::InvalidQuestionShape)?;
    if !(0.0..=3.0).contains(&correct) {
        return Err(AppError::InvalidQuestionShape);
    }

    Ok(())
}
