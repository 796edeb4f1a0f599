pub mod quiz_prompt;

/// Number of questions a generated quiz must contain.
pub const QUESTION_COUNT: usize = 5;

/// Number of answer options each question must contain.
pub const OPTION_COUNT: usize = 4;

/// Maximum accepted topic length in characters.
pub const MAX_TOPIC_LEN: usize = 100;

/// Messages API protocol version pinned on every provider request.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
