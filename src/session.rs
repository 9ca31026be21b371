//! Everything one study session owns.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::data::NoteStore;
use crate::error::StudyError;
use crate::flashcards::Deck;
use crate::jobs::Completion;
use crate::mailbox::{Mailbox, Ticket};
use crate::progress::ProgressLog;
use crate::quiz::{QuizInstance, QuizPhase};
use crate::timer::{Countdown, CountdownTick, Stopwatch};

/// Message shown when the countdown reaches zero.
pub const TIME_UP: &str = "Time's up!";

/// A result slot for one generating feature.
pub type Slot<T> = Mailbox<Result<T, StudyError>>;

/// In-memory state of a session. Dropped when the user logs out.
#[derive(Debug)]
pub struct StudySession {
    id: Uuid,
    config: DashboardConfig,
    pub notes: NoteStore,
    /// Name and text of the note opened with `view`.
    pub viewed_note: Option<(String, String)>,
    pub summary: Slot<String>,
    pub tutor: Slot<String>,
    pub quiz: Slot<QuizInstance>,
    /// Question that keyboard selection applies to.
    pub quiz_focus: usize,
    pub flashcards: Slot<Deck>,
    pub countdown: Countdown,
    pub stopwatch: Stopwatch,
    pub progress: ProgressLog,
}

impl StudySession {
    pub fn new(config: DashboardConfig) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            config,
            notes: NoteStore::new(),
            viewed_note: None,
            summary: Mailbox::new(),
            tutor: Mailbox::new(),
            quiz: Mailbox::new(),
            quiz_focus: 0,
            flashcards: Mailbox::new(),
            countdown: Countdown::new(),
            stopwatch: Stopwatch::new(),
            progress: ProgressLog::new(),
        };
        info!(session = %session.id, user = %session.config.user, "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> &str {
        &self.config.user
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn quiz_phase(&self) -> QuizPhase {
        if self.quiz.is_pending() {
            return QuizPhase::Generating;
        }
        match self.quiz.get() {
            Some(Ok(quiz)) if quiz.is_graded() => QuizPhase::Graded,
            Some(Ok(_)) => QuizPhase::Ready,
            _ => QuizPhase::Empty,
        }
    }

    pub fn current_quiz(&self) -> Option<&QuizInstance> {
        self.quiz.get().and_then(|result| result.as_ref().ok())
    }

    pub fn current_quiz_mut(&mut self) -> Option<&mut QuizInstance> {
        self.quiz.get_mut().and_then(|result| result.as_mut().ok())
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.flashcards.get().and_then(|result| result.as_ref().ok())
    }

    pub fn deck_mut(&mut self) -> Option<&mut Deck> {
        self.flashcards.get_mut().and_then(|result| result.as_mut().ok())
    }

    /// Stores a finished job's result. Returns a status line for the user.
    ///
    /// Results for superseded requests are dropped.
    pub fn apply(&mut self, completion: Completion) -> Option<String> {
        match completion {
            Completion::Notes(Ok(notes)) => {
                let names = self.notes.save(notes);
                info!(count = names.len(), "notes saved");
                Some(format!("Saved: {}", names.join(", ")))
            }
            Completion::Notes(Err(err)) => {
                warn!(error = %err, "saving notes failed");
                Some(err.to_string())
            }
            Completion::Summary(ticket, result) => {
                deliver(&mut self.summary, "summary", ticket, result)
            }
            Completion::Tutor(ticket, result) => deliver(&mut self.tutor, "tutor", ticket, result),
            Completion::Quiz(ticket, result) => {
                let message = match &result {
                    Ok(quiz) if quiz.len() == 1 => "Quiz ready: 1 question.".to_string(),
                    Ok(quiz) => format!("Quiz ready: {} questions.", quiz.len()),
                    Err(err) => err.to_string(),
                };
                if !self.quiz.deliver(ticket, result) {
                    debug!(ticket = ticket.number(), feature = "quiz", "discarded stale result");
                    return None;
                }
                self.quiz_focus = 0;
                Some(message)
            }
            Completion::Flashcards(ticket, result) => {
                deliver(&mut self.flashcards, "flashcards", ticket, result)
            }
        }
    }

    /// Advances both timers by one second.
    pub fn tick(&mut self) -> Option<&'static str> {
        self.stopwatch.tick();
        match self.countdown.tick() {
            CountdownTick::Finished => {
                info!("countdown finished");
                Some(TIME_UP)
            }
            CountdownTick::Idle | CountdownTick::Running(_) => None,
        }
    }

    /// Discards notes, results, timers and the progress log.
    pub fn reset(&mut self) {
        info!(session = %self.id, "session cleared");
        self.notes.clear();
        self.viewed_note = None;
        self.summary.clear();
        self.tutor.clear();
        self.quiz.clear();
        self.quiz_focus = 0;
        self.flashcards.clear();
        self.countdown.reset();
        self.stopwatch.reset();
        self.progress.clear();
    }
}

fn deliver<T>(
    slot: &mut Slot<T>,
    feature: &str,
    ticket: Ticket,
    result: Result<T, StudyError>,
) -> Option<String> {
    let message = result.as_ref().err().map(ToString::to_string);
    if !slot.deliver(ticket, result) {
        debug!(ticket = ticket.number(), feature, "discarded stale result");
        return None;
    }
    message
}
