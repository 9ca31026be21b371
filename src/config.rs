//! Runtime configuration shared by the library and the binary.

/// Default chat-completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct";

/// Questions per quiz when none is requested.
pub const DEFAULT_QUIZ_COUNT: usize = 5;

/// Upper bound on questions per quiz.
pub const MAX_QUIZ_COUNT: usize = 50;

/// Flashcards requested per generation.
pub const DEFAULT_FLASHCARD_COUNT: usize = 10;

/// Name shown when no user is given.
pub const DEFAULT_USER: &str = "Student";

/// Settings for the remote inference client.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub model: String,
    /// Bearer credential. Requests are sent unauthenticated without one.
    pub api_key: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

/// Settings for the interactive dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub user: String,
    pub quiz_count: usize,
    pub flashcard_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            quiz_count: DEFAULT_QUIZ_COUNT,
            flashcard_count: DEFAULT_FLASHCARD_COUNT,
        }
    }
}
