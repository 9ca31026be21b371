use thiserror::Error;

use crate::data::NoteError;
use crate::flashcards::FlashcardError;
use crate::inference::InferenceError;
use crate::progress::ProgressError;
use crate::quiz::{QuizError, SelectionError};
use crate::timer::TimerError;

/// Any failure a dashboard action can report.
///
/// The `Display` text is what the dashboard shows in the affected panel.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error("Error: {0}")]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Flashcards(#[from] FlashcardError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_messages() {
        let err = StudyError::from(InferenceError::Service("Invalid API key".into()));
        assert_eq!(err.to_string(), "Error: Invalid API key");

        let err = StudyError::from(QuizError::UnexpectedFormat);
        assert_eq!(
            err.to_string(),
            "Quiz creation failed: AI returned unexpected format."
        );

        let err = StudyError::from(NoteError::MissingSource);
        assert_eq!(err.to_string(), "Select or upload a file.");
    }

    #[test]
    fn test_input_errors_keep_their_message() {
        let err = StudyError::from(SelectionError::Locked);
        assert_eq!(
            err.to_string(),
            "Quiz already graded. Generate a new quiz to try again."
        );

        let err = StudyError::from(ProgressError::MissingField);
        assert_eq!(err.to_string(), "Please fill in all fields.");

        let err = StudyError::from(TimerError::NotPositive);
        assert_eq!(err.to_string(), TimerError::NotPositive.to_string());
    }
}
