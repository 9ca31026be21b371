//! # study-dash
//!
//! A terminal study dashboard. Notes are kept in memory for the session and
//! fed to a chat-completion model to produce summaries, tutoring answers,
//! multiple-choice quizzes and flashcards. A countdown, a stopwatch and an
//! exam score log round it off.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use study_dash::{Dashboard, DashboardConfig, InferenceConfig, StudyError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), StudyError> {
//!     let mut dashboard = Dashboard::new(DashboardConfig::default(), InferenceConfig::default());
//!     dashboard.preload(&["notes/biology.rtf"]).await?;
//!     dashboard.run().await
//! }
//! ```

mod app;
mod commands;
pub mod config;
pub mod data;
mod error;
pub mod flashcards;
pub mod inference;
mod jobs;
pub mod logging;
pub mod mailbox;
pub mod models;
pub mod parsing;
pub mod progress;
pub mod prompt;
pub mod protocol;
pub mod quiz;
mod session;
pub mod terminal;
pub mod timer;
mod ui;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

pub use app::App;
pub use commands::{execute_command, CommandResult, COMMAND_HELP};
pub use config::{DashboardConfig, InferenceConfig};
pub use data::{Note, NoteError, NoteStore};
pub use error::StudyError;
pub use inference::{InferenceClient, InferenceError, OpenRouterClient};
pub use jobs::{run_job, Completion, Job, TutorRequest};
pub use protocol::{ChatMessage, ChatRequest, ChatResponse};
pub use session::{Slot, StudySession, TIME_UP};

/// The interactive dashboard.
pub struct Dashboard {
    app: App,
}

impl Dashboard {
    /// A dashboard talking to the configured endpoint.
    pub fn new(config: DashboardConfig, inference: InferenceConfig) -> Self {
        Self::with_client(config, Arc::new(OpenRouterClient::new(inference)))
    }

    /// A dashboard backed by any inference client.
    pub fn with_client(config: DashboardConfig, client: Arc<dyn InferenceClient>) -> Self {
        Self {
            app: App::new(StudySession::new(config), client),
        }
    }

    /// Saves note files into the session before the dashboard opens.
    pub async fn preload<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<(), StudyError> {
        if paths.is_empty() {
            return Ok(());
        }
        let notes = data::load_notes(paths).await?;
        let names = self.app.session.notes.save(notes);
        info!(count = names.len(), "preloaded notes");
        self.app.status = Some(format!("Saved: {}", names.join(", ")));
        Ok(())
    }

    /// Take over the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), StudyError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        app::run_event_loop(guard.terminal(), &mut self.app).await?;
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
