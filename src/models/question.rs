use serde_json::Value;

use crate::parsing::value_to_text;

/// Number of options every quiz question carries.
pub const NUM_OPTIONS: usize = 4;

/// Labels shown in front of the options.
pub const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

/// A question object as the model produced it. Nothing is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuestionCandidate {
    pub question: Option<String>,
    /// The model is asked to put the correct answer first.
    pub options: Option<Vec<String>>,
}

impl RawQuestionCandidate {
    /// Reads a candidate from any JSON value.
    ///
    /// Scalars are stringified. `null` counts as missing, and `options` that
    /// is not an array is treated as missing.
    pub fn from_value(value: &Value) -> Self {
        let question = value
            .get("question")
            .filter(|question| !question.is_null())
            .map(value_to_text);
        let options = value
            .get("options")
            .and_then(Value::as_array)
            .map(|options| options.iter().map(value_to_text).collect());
        Self { question, options }
    }
}

/// A sanitized quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_index: usize,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}
