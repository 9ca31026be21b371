//! Instructions sent to the model for each dashboard feature.

/// What the model is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<'a> {
    /// Summarize note text into headed bullet sections.
    Summarize { text: &'a str },
    /// Teach the content of a note.
    Explain { text: &'a str },
    /// Answer a free-form question.
    Answer { question: &'a str },
    /// Multiple-choice questions, correct option first.
    Quiz { text: &'a str, count: usize },
    /// Question and answer flashcards.
    Flashcards { text: &'a str, count: usize },
}

/// Builds the prompt for an intent.
pub fn build_prompt(intent: &Intent<'_>) -> String {
    match intent {
        Intent::Summarize { text } => format!(
            "Summarise the text below into neat sections.\n\
             - Give each section a short heading.\n\
             - Put 2-6 bullet points under each heading.\n\
             Keep the bullets short and simple.\n\n\
             Text:\n{text}"
        ),
        Intent::Explain { text } => {
            format!("Teach the following material in short bullet points:\n{text}")
        }
        Intent::Answer { question } => {
            format!("Answer concisely in bullet points:\n{question}")
        }
        Intent::Quiz { text, count } => format!(
            "Create exactly {count} multiple choice questions from the text below.\n\
             Rules:\n\
             - Every question has exactly 4 options.\n\
             - The CORRECT answer must be the FIRST entry of the options array.\n\
             - Return ONLY a JSON array of objects shaped like \
             {{\"question\":\"...\",\"options\":[\"correct\",\"wrong\",\"wrong\",\"wrong\"]}}.\n\
             - Do not add any text before or after the JSON.\n\n\
             Text:\n{text}"
        ),
        Intent::Flashcards { text, count } => format!(
            "Generate {count} short flashcards (question and answer) from the text below.\n\
             Return ONLY a JSON array shaped like [{{\"q\":\"...\",\"a\":\"...\"}}].\n\n\
             Text:\n{text}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_prompt_contract() {
        let prompt = build_prompt(&Intent::Quiz {
            text: "Mitochondria produce ATP.",
            count: 7,
        });
        assert!(prompt.contains("exactly 7 multiple choice questions"));
        assert!(prompt.contains("exactly 4 options"));
        assert!(prompt.contains("FIRST entry"));
        assert!(prompt.contains(r#"{"question":"...","options":["correct","wrong","wrong","wrong"]}"#));
        assert!(prompt.ends_with("Mitochondria produce ATP."));
    }

    #[test]
    fn test_flashcard_prompt_contract() {
        let prompt = build_prompt(&Intent::Flashcards {
            text: "notes",
            count: 10,
        });
        assert!(prompt.starts_with("Generate 10 short flashcards"));
        assert!(prompt.contains(r#"[{"q":"...","a":"..."}]"#));
    }

    #[test]
    fn test_tutor_prompts() {
        let answer = build_prompt(&Intent::Answer {
            question: "What is osmosis?",
        });
        assert!(answer.contains("bullet points"));
        assert!(answer.ends_with("What is osmosis?"));

        let explain = build_prompt(&Intent::Explain { text: "Cell walls" });
        assert!(explain.ends_with("Cell walls"));
    }

    #[test]
    fn test_summary_prompt_includes_text() {
        let prompt = build_prompt(&Intent::Summarize { text: "Krebs cycle" });
        assert!(prompt.contains("2-6 bullet points"));
        assert!(prompt.ends_with("Text:\nKrebs cycle"));
    }
}
