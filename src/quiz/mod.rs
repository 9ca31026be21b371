//! Multiple-choice quizzes generated from notes.

mod engine;
mod instance;

pub use engine::{
    generate_quiz, sanitize, sanitize_candidate, shuffle_options, QuizError, SanitizeError,
};
pub use instance::{
    display_options, GradeReport, QuestionMark, QuizInstance, SelectionError, PLACEHOLDER_OPTIONS,
};

/// Lifecycle of the session's quiz slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Empty,
    Generating,
    Ready,
    Graded,
}
