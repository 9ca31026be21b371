//! Turning model output into trusted quiz questions.

use rand::Rng;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::inference::{InferenceClient, InferenceError};
use crate::models::{Question, RawQuestionCandidate, NUM_OPTIONS};
use crate::parsing::extract_json_array;
use crate::prompt::{build_prompt, Intent};

use super::instance::QuizInstance;

/// Why a batch of candidates produced no questions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SanitizeError {
    /// There was nothing to sanitize.
    #[error("no question candidates were supplied")]
    NoCandidates,
    /// Every considered candidate was malformed.
    #[error("none of {considered} question candidates were usable")]
    NoValidQuestions { considered: usize },
}

/// Failures of a whole quiz generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Error: {0}")]
    Inference(#[from] InferenceError),
    /// The reply held no JSON array, or an empty one.
    #[error("Quiz creation failed: AI returned unexpected format.")]
    UnexpectedFormat,
    /// The reply parsed, but no question survived sanitizing.
    #[error("No valid questions were produced.")]
    NoValidQuestions,
}

impl From<SanitizeError> for QuizError {
    fn from(err: SanitizeError) -> Self {
        match err {
            SanitizeError::NoCandidates => QuizError::UnexpectedFormat,
            SanitizeError::NoValidQuestions { .. } => QuizError::NoValidQuestions,
        }
    }
}

/// Shuffles in place with Fisher-Yates, walking from the last index down.
pub fn shuffle_options<R: Rng>(options: &mut [String], rng: &mut R) {
    for i in (1..options.len()).rev() {
        let j = rng.random_range(0..=i);
        options.swap(i, j);
    }
}

/// Validates one candidate and shuffles its options.
///
/// Returns `None` when the question text is blank or fewer than four
/// options are present. Only the first four options are kept.
pub fn sanitize_candidate<R: Rng>(candidate: RawQuestionCandidate, rng: &mut R) -> Option<Question> {
    let text = candidate.question.filter(|text| !text.trim().is_empty())?;
    let mut options = candidate.options.filter(|options| options.len() >= NUM_OPTIONS)?;
    options.truncate(NUM_OPTIONS);

    let correct_text = options[0].clone();
    shuffle_options(&mut options, rng);
    // First match wins if the model repeated the correct text.
    let correct_index = options
        .iter()
        .position(|option| *option == correct_text)
        .unwrap_or(0);

    let options: [String; NUM_OPTIONS] = options.try_into().ok()?;
    Some(Question {
        text,
        options,
        correct_index,
    })
}

/// Sanitizes up to `count` candidates, skipping malformed ones.
pub fn sanitize<R: Rng>(
    candidates: &[Value],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, SanitizeError> {
    if candidates.is_empty() {
        return Err(SanitizeError::NoCandidates);
    }

    let considered = candidates.len().min(count);
    let questions: Vec<Question> = candidates
        .iter()
        .take(considered)
        .enumerate()
        .filter_map(|(index, value)| {
            let question = sanitize_candidate(RawQuestionCandidate::from_value(value), rng);
            if question.is_none() {
                debug!(index, "dropping malformed question candidate");
            }
            question
        })
        .collect();

    if questions.is_empty() {
        return Err(SanitizeError::NoValidQuestions { considered });
    }
    Ok(questions)
}

/// Asks the model for a quiz over `text` and sanitizes the reply.
pub async fn generate_quiz<R: Rng + Send>(
    client: &dyn InferenceClient,
    text: &str,
    count: usize,
    rng: &mut R,
) -> Result<QuizInstance, QuizError> {
    let prompt = build_prompt(&Intent::Quiz { text, count });
    let reply = client.infer(&prompt).await?;

    let candidates = extract_json_array(&reply).ok_or(QuizError::UnexpectedFormat)?;
    let questions = sanitize(&candidates, count, rng)?;

    info!(
        requested = count,
        candidates = candidates.len(),
        accepted = questions.len(),
        "quiz generated"
    );
    Ok(QuizInstance::new(questions))
}
