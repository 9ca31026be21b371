//! Flashcard generation and the deck shown on the dashboard.

use thiserror::Error;
use tracing::{debug, info};

use crate::inference::{InferenceClient, InferenceError};
use crate::models::Flashcard;
use crate::parsing::extract_json_array;
use crate::prompt::{build_prompt, Intent};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("Error: {0}")]
    Inference(#[from] InferenceError),
    #[error("Could not parse flashcards.")]
    Unparseable,
}

/// Asks the model for `count` cards about `text`.
pub async fn generate_flashcards(
    client: &dyn InferenceClient,
    text: &str,
    count: usize,
) -> Result<Vec<Flashcard>, FlashcardError> {
    let prompt = build_prompt(&Intent::Flashcards { text, count });
    let reply = client.infer(&prompt).await?;

    let Some(values) = extract_json_array(&reply).filter(|values| !values.is_empty()) else {
        debug!(reply = %reply, "no flashcard array in reply");
        return Err(FlashcardError::Unparseable);
    };

    let cards: Vec<Flashcard> = values.iter().map(Flashcard::from_value).collect();
    info!(cards = cards.len(), "flashcards generated");
    Ok(cards)
}

/// Generated cards with a focus cursor.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Flashcard>,
    focused: usize,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards, focused: 0 }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        if !self.cards.is_empty() {
            self.focused = (self.focused + 1) % self.cards.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.cards.is_empty() {
            self.focused = (self.focused + self.cards.len() - 1) % self.cards.len();
        }
    }

    /// Flips the focused card. Returns false on an empty deck.
    pub fn flip_focused(&mut self) -> bool {
        self.flip(self.focused)
    }

    pub fn flip(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.flip();
                true
            }
            None => false,
        }
    }
}
