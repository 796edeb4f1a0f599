use once_cell::sync::Lazy;
use regex::Regex;

/// Denylist sources, matched case-insensitively anywhere in the topic.
///
/// Deliberately coarse. This is defense-in-depth ahead of the provider's own
/// refusals, not an attempt at exhaustive content classification.
const BLOCKED_PATTERN_SOURCES: &[&str] = &[
    r"(?i)\b(porn|xxx|sex|nude|naked|hentai)\b",
    r"(?i)\b(kill|murder|suicide|terroris|bomb|weapon)\b",
    r"(?i)\b(drug|cocaine|heroin|meth)\b",
    r"(?i)\b(child|minor|underage).*(sex|abuse|porn)",
    r"(?i)\b(rape|assault|molest)\b",
    r"(?i)\b(nazi|hitler|white\s*power|kkk)\b",
    r"(?i)how\s+to\s+(hack|steal|forge)",
];

static BLOCKED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    BLOCKED_PATTERN_SOURCES
        .iter()
        .map(|source| Regex::new(source).expect("blocked pattern is a valid regex"))
        .collect()
});

/// Screens topics against a set of compiled denylist patterns.
///
/// The pattern list is injected at construction so tests can substitute a
/// reduced set and the denylist can grow without touching control flow.
pub struct TopicFilter {
    patterns: Vec<Regex>,
}

impl TopicFilter {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    pub fn is_blocked(&self, topic: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(topic))
    }
}

impl Default for TopicFilter {
    fn default() -> Self {
        Self::new(BLOCKED_PATTERNS.clone())
    }
}
