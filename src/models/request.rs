use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    /// A missing topic deserializes to the empty string and fails the length
    /// rule, so "absent" and "empty" reject identically.
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub topic: String,
}
