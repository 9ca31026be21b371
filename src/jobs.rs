//! Background work started by dashboard commands.
//!
//! A [`Job`] is created synchronously by the command executor, after every
//! input check has passed, and run on its own tokio task. The result comes
//! back to the event loop as a [`Completion`] carrying the mailbox ticket it
//! was issued under.

use std::path::PathBuf;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

use crate::data::{load_notes, Note, NoteError, Source};
use crate::error::StudyError;
use crate::flashcards::{generate_flashcards, Deck};
use crate::inference::InferenceClient;
use crate::mailbox::Ticket;
use crate::models::Section;
use crate::prompt::{build_prompt, Intent};
use crate::quiz::{generate_quiz, QuizInstance};

/// What the tutor is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorRequest {
    /// Answer a typed question.
    Ask(String),
    /// Teach the content of a note.
    Teach(Source),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    LoadNotes { paths: Vec<PathBuf> },
    Summarize { ticket: Ticket, source: Source },
    Tutor { ticket: Ticket, request: TutorRequest },
    Quiz { ticket: Ticket, source: Source, count: usize },
    Flashcards { ticket: Ticket, source: Source, count: usize },
}

impl Job {
    /// Panel that shows this job's result.
    pub fn section(&self) -> Section {
        match self {
            Job::LoadNotes { .. } => Section::Notes,
            Job::Summarize { .. } => Section::Summary,
            Job::Tutor { .. } => Section::Tutor,
            Job::Quiz { .. } => Section::Quiz,
            Job::Flashcards { .. } => Section::Flashcards,
        }
    }

    /// Status line shown while the job runs.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Job::LoadNotes { .. } => "Saving notes...",
            Job::Summarize { .. } => "Summarizing...",
            Job::Tutor { .. } => "Thinking...",
            Job::Quiz { .. } => "Generating quiz...",
            Job::Flashcards { .. } => "Generating flashcards...",
        }
    }
}

/// Result of a finished [`Job`].
#[derive(Debug)]
pub enum Completion {
    Notes(Result<Vec<Note>, NoteError>),
    Summary(Ticket, Result<String, StudyError>),
    Tutor(Ticket, Result<String, StudyError>),
    Quiz(Ticket, Result<QuizInstance, StudyError>),
    Flashcards(Ticket, Result<Deck, StudyError>),
}

/// Runs a job to completion.
#[instrument(skip_all, fields(section = job.section().title()))]
pub async fn run_job(job: Job, client: Arc<dyn InferenceClient>) -> Completion {
    info!("job started");
    match job {
        Job::LoadNotes { paths } => Completion::Notes(load_notes(&paths).await),
        Job::Summarize { ticket, source } => {
            Completion::Summary(ticket, summarize(client.as_ref(), source).await)
        }
        Job::Tutor { ticket, request } => {
            Completion::Tutor(ticket, tutor(client.as_ref(), request).await)
        }
        Job::Quiz {
            ticket,
            source,
            count,
        } => Completion::Quiz(ticket, quiz(client.as_ref(), source, count).await),
        Job::Flashcards {
            ticket,
            source,
            count,
        } => Completion::Flashcards(ticket, flashcards(client.as_ref(), source, count).await),
    }
}

async fn summarize(client: &dyn InferenceClient, source: Source) -> Result<String, StudyError> {
    let text = source.into_text().await?;
    let prompt = build_prompt(&Intent::Summarize { text: &text });
    Ok(client.infer(&prompt).await?)
}

async fn tutor(client: &dyn InferenceClient, request: TutorRequest) -> Result<String, StudyError> {
    let prompt = match request {
        TutorRequest::Ask(question) => build_prompt(&Intent::Answer {
            question: &question,
        }),
        TutorRequest::Teach(source) => {
            let text = source.into_text().await?;
            build_prompt(&Intent::Explain { text: &text })
        }
    };
    Ok(client.infer(&prompt).await?)
}

async fn quiz(
    client: &dyn InferenceClient,
    source: Source,
    count: usize,
) -> Result<QuizInstance, StudyError> {
    let text = source.into_text().await?;
    let mut rng = StdRng::from_os_rng();
    Ok(generate_quiz(client, &text, count, &mut rng).await?)
}

async fn flashcards(
    client: &dyn InferenceClient,
    source: Source,
    count: usize,
) -> Result<Deck, StudyError> {
    let text = source.into_text().await?;
    let cards = generate_flashcards(client, &text, count).await?;
    Ok(Deck::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::testing::ScriptedClient;
    use crate::inference::InferenceError;
    use crate::mailbox::Mailbox;

    fn ticket() -> Ticket {
        Mailbox::<()>::new().begin()
    }

    #[tokio::test]
    async fn test_summary_job_uses_note_text() {
        let client = Arc::new(ScriptedClient::ok("## Cells\n- small"));
        let job = Job::Summarize {
            ticket: ticket(),
            source: Source::Text("Cells are small.".into()),
        };

        let Completion::Summary(_, result) = run_job(job, client.clone()).await else {
            panic!("expected a summary completion");
        };
        assert_eq!(result.unwrap(), "## Cells\n- small");
        assert!(client.prompts.lock().unwrap()[0].ends_with("Cells are small."));
    }

    #[tokio::test]
    async fn test_tutor_ask_sends_question() {
        let client = Arc::new(ScriptedClient::ok("- 42"));
        let job = Job::Tutor {
            ticket: ticket(),
            request: TutorRequest::Ask("What is the answer?".into()),
        };

        let Completion::Tutor(_, result) = run_job(job, client.clone()).await else {
            panic!("expected a tutor completion");
        };
        assert_eq!(result.unwrap(), "- 42");
        assert!(client.prompts.lock().unwrap()[0].contains("What is the answer?"));
    }

    #[tokio::test]
    async fn test_unreadable_file_fails_before_inference() {
        let client = Arc::new(ScriptedClient::ok("unused"));
        let job = Job::Quiz {
            ticket: ticket(),
            source: Source::File("/definitely/not/here.txt".into()),
            count: 3,
        };

        let Completion::Quiz(_, result) = run_job(job, client.clone()).await else {
            panic!("expected a quiz completion");
        };
        assert!(matches!(result, Err(StudyError::Note(NoteError::Read { .. }))));
        assert!(client.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_flashcard_job_failure_is_reported() {
        let client = Arc::new(ScriptedClient::replying(vec![Err(InferenceError::EmptyReply)]));
        let job = Job::Flashcards {
            ticket: ticket(),
            source: Source::Text("notes".into()),
            count: 10,
        };

        let Completion::Flashcards(_, result) = run_job(job, client).await else {
            panic!("expected a flashcards completion");
        };
        assert_eq!(result.unwrap_err().to_string(), "Error: No reply");
    }
}
