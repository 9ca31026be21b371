use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::commands::{execute_command, CommandResult};
use crate::inference::InferenceClient;
use crate::jobs::{run_job, Completion, Job};
use crate::models::{Section, NUM_OPTIONS};
use crate::session::StudySession;
use crate::terminal::AppTerminal;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Dashboard state: the study session plus what is on screen.
pub struct App {
    pub session: StudySession,
    pub section: Section,
    previous_section: Option<Section>,
    pub command_input: String,
    /// Last status or error line.
    pub status: Option<String>,
    pub scroll: u16,
    client: Arc<dyn InferenceClient>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: StudySession, client: Arc<dyn InferenceClient>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            session,
            section: Section::default(),
            previous_section: None,
            command_input: String::new(),
            status: None,
            scroll: 0,
            client,
            completion_tx,
            completion_rx,
            should_quit: false,
        }
    }

    pub fn show(&mut self, section: Section) {
        if section == Section::Help && self.section != Section::Help {
            self.previous_section = Some(self.section);
        }
        self.section = section;
        self.scroll = 0;
    }

    fn close_help(&mut self) {
        let previous = self.previous_section.take().unwrap_or_default();
        self.show(previous);
    }

    /// Runs the command bar input.
    pub fn submit_command(&mut self) {
        let input = std::mem::take(&mut self.command_input);
        if !input.trim().is_empty() {
            debug!(command = %input.trim(), "command entered");
        }

        match execute_command(&mut self.session, &input) {
            CommandResult::Ok(Some(msg)) => self.status = Some(msg),
            CommandResult::Ok(None) => {}
            CommandResult::Error(msg) => {
                self.status = Some(format!("Error: {}", msg));
            }
            CommandResult::Show(section) => self.show(section),
            CommandResult::Dispatch(job) => self.dispatch(job),
            CommandResult::Quit => self.should_quit = true,
        }
    }

    /// Spawns a job. Its result arrives through [`App::drain_completions`].
    pub fn dispatch(&mut self, job: Job) {
        self.show(job.section());
        self.status = Some(job.progress_message().to_string());
        info!(section = job.section().title(), "dispatching job");

        let client = Arc::clone(&self.client);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            if tx.send(run_job(job, client).await).is_err() {
                warn!("dashboard closed before the job finished");
            }
        });
    }

    pub fn on_completion(&mut self, completion: Completion) {
        if let Some(msg) = self.session.apply(completion) {
            self.status = Some(msg);
        }
    }

    /// Applies every finished job without waiting.
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.on_completion(completion);
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(msg) = self.session.tick() {
            self.status = Some(msg.to_string());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.section == Section::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.close_help();
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.command_input.push(c),
            KeyCode::Backspace => {
                self.command_input.pop();
            }
            KeyCode::Enter => self.submit_command(),
            KeyCode::Esc => self.command_input.clear(),
            KeyCode::Tab => self.show(self.section.next()),
            KeyCode::BackTab => self.show(self.section.previous()),
            KeyCode::Up => self.move_focus(false),
            KeyCode::Down => self.move_focus(true),
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            _ => {}
        }
    }

    fn move_focus(&mut self, forward: bool) {
        match self.section {
            Section::Quiz => {
                let len = self.session.current_quiz().map_or(0, |quiz| quiz.len());
                if len > 0 {
                    let focus = self.session.quiz_focus;
                    self.session.quiz_focus = if forward {
                        (focus + 1) % len
                    } else {
                        (focus + len - 1) % len
                    };
                }
            }
            Section::Flashcards => {
                if let Some(deck) = self.session.deck_mut() {
                    if forward {
                        deck.focus_next();
                    } else {
                        deck.focus_previous();
                    }
                }
            }
            _ => {
                self.scroll = if forward {
                    self.scroll.saturating_add(1)
                } else {
                    self.scroll.saturating_sub(1)
                };
            }
        }
    }

    /// Left/Right: changes the focused quiz answer, or flips the focused card.
    fn cycle_choice(&mut self, forward: bool) {
        match self.section {
            Section::Quiz => {
                let focus = self.session.quiz_focus;
                let Some(quiz) = self.session.current_quiz_mut() else {
                    return;
                };
                let next = match (quiz.selection(focus), forward) {
                    (None, true) => 0,
                    (None, false) => NUM_OPTIONS - 1,
                    (Some(current), true) => (current + 1) % NUM_OPTIONS,
                    (Some(current), false) => (current + NUM_OPTIONS - 1) % NUM_OPTIONS,
                };
                if let Err(err) = quiz.select(focus, next) {
                    self.status = Some(format!("Error: {}", err));
                }
            }
            Section::Flashcards => {
                if let Some(deck) = self.session.deck_mut() {
                    deck.flip_focused();
                }
            }
            _ => {}
        }
    }
}

/// Runs the dashboard until the user quits.
#[instrument(skip_all, fields(session = %app.session.id(), user = %app.session.user()))]
pub async fn run_event_loop(terminal: &mut AppTerminal, app: &mut App) -> io::Result<()> {
    info!("dashboard started");
    let mut last_tick = Instant::now();

    while !app.should_quit {
        app.drain_completions();
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input with timeout to allow for periodic updates
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        while last_tick.elapsed() >= TICK_INTERVAL {
            last_tick += TICK_INTERVAL;
            app.on_tick();
        }
    }

    info!("dashboard closed");
    Ok(())
}
