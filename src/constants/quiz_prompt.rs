/// Builds the single-turn prompt sent to the completion provider for a topic.
///
/// The model is told to answer with raw JSON only; `extract_json` in
/// `services::quiz_validator` copes with the cases where it wraps the JSON in
/// prose or a markdown fence anyway.
pub fn quiz_prompt(topic: &str) -> String {
    format!(
        r#"Generate a quiz with exactly 5 multiple choice questions about: {topic}

IMPORTANT: Return ONLY valid JSON in this exact format, no other text:
{{
    "questions": [
        {{
            "question": "Question text here?",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct": 0
        }}
    ]
}}

Rules:
- Exactly 5 questions
- Exactly 4 options per question (A, B, C, D)
- "correct" is the index (0-3) of the correct answer
- Mix of easy, medium, and hard questions
- Questions should be factual and verifiable
- Keep questions engaging and interesting
- For celebrities/entertainment: focus on career facts, not personal gossip
- For education: ensure accuracy

Return ONLY the JSON, no markdown, no explanation."#
    )
}
