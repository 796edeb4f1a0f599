#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// Creates a well-formed question with the given correct index.
    pub fn question(correct: usize) -> Value {
        json!({
            "question": "Which planet is closest to the sun?",
            "options": ["Mercury", "Venus", "Earth", "Mars"],
            "correct": correct
        })
    }

    /// Creates a quiz with the given number of well-formed questions.
    pub fn quiz_with(count: usize) -> Value {
        let questions: Vec<Value> = (0..count).map(|i| question(i % 4)).collect();
        json!({ "questions": questions })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_question() {
        let q = question(2);
        assert_eq!(q["correct"], 2);
        assert_eq!(q["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_fixtures_quiz_with() {
        let quiz = quiz_with(5);
        assert_eq!(quiz["questions"].as_array().unwrap().len(), 5);
    }
}
