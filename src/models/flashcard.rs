use serde_json::Value;

use crate::parsing::value_to_text;

/// A two-sided study card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub flipped: bool,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            flipped: false,
        }
    }

    /// Builds a card from a `{q, a}` object. Missing or null sides are empty.
    pub fn from_value(value: &Value) -> Self {
        let side = |key: &str| {
            value
                .get(key)
                .filter(|side| !side.is_null())
                .map(value_to_text)
                .unwrap_or_default()
        };
        Self::new(side("q"), side("a"))
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// The side currently facing up.
    pub fn visible_text(&self) -> &str {
        if self.flipped { &self.answer } else { &self.question }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_value_tolerates_missing_sides() {
        let card = Flashcard::from_value(&json!({"q": "What is DNA?"}));
        assert_eq!(card.question, "What is DNA?");
        assert_eq!(card.answer, "");

        let card = Flashcard::from_value(&json!(7));
        assert_eq!(card, Flashcard::default());
    }

    #[test]
    fn test_flip_toggles_visible_side() {
        let mut card = Flashcard::new("Q", "A");
        assert_eq!(card.visible_text(), "Q");
        card.flip();
        assert_eq!(card.visible_text(), "A");
        card.flip();
        assert_eq!(card.visible_text(), "Q");
    }
}
