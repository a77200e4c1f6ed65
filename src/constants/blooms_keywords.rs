//! Bloom's taxonomy reference phrases used for LOTS/HOTS classification.
//!
//! Both lists are fixed for the life of the process; their embeddings are
//! computed once at startup.

/// Remember, Understand and Apply levels.
pub const LOTS_KEYWORDS: &[&str] = &[
    // Remember
    "identify", "define", "list", "name", "state", "label",
    "recall", "recognize", "match", "select", "who", "what",
    "when", "where", "which",
    // Understand
    "explain", "summarize", "interpret", "classify", "describe",
    "discuss", "illustrate", "paraphrase", "restate", "translate",
    // Apply
    "compute", "calculate", "solve", "apply", "demonstrate",
    "use", "show", "complete", "examine", "modify", "implement",
];

/// Analyze, Evaluate and Create levels.
pub const HOTS_KEYWORDS: &[&str] = &[
    // Analyze
    "analyze", "compare and contrast", "differentiate", "examine",
    "distinguish", "investigate", "categorize", "infer",
    "breakdown", "deconstruct", "organize", "separate",
    // Evaluate
    "evaluate", "assess", "justify", "critique", "argue",
    "defend", "judge", "rate", "validate", "support",
    "recommend", "prioritize", "prove", "disprove",
    // Create
    "create", "design", "formulate", "propose", "construct",
    "develop", "predict", "hypothesize", "compose", "plan",
    "generate", "devise", "why", "how would", "what if",
    "imagine", "invent", "synthesize",
];

pub fn lots_keywords() -> Vec<String> {
    LOTS_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

pub fn hots_keywords() -> Vec<String> {
    HOTS_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
