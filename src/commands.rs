//! Command bar parser and executor.
//!
//! Every check on user input happens here, synchronously. A command that
//! needs the network or the filesystem comes back as a [`Job`] for the event
//! loop to spawn.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::MAX_QUIZ_COUNT;
use crate::data::NoteError;
use crate::error::StudyError;
use crate::jobs::{Job, TutorRequest};
use crate::models::{Section, OPTION_LABELS};
use crate::quiz::QuizPhase;
use crate::session::StudySession;
use crate::timer::parse_minutes;

/// Commands listed by `help`, with their arguments.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("save <path>...", "Save note files; quote paths with spaces"),
    ("files", "List saved notes"),
    ("view <note>", "Show the text of a saved note"),
    ("delete <note>", "Remove a saved note"),
    ("summarize <note>", "Summarize a note or file"),
    ("ask <question>", "Ask the tutor a question"),
    ("teach <note>", "Have the tutor explain a note"),
    ("quiz <note> [n]", "Generate n questions; a full note name wins over n"),
    ("answer <q> <A-D>", "Pick an option for question q"),
    ("clear <q>", "Clear the answer to question q"),
    ("grade / submit", "Grade the current quiz"),
    ("flashcards <note>", "Generate flashcards"),
    ("flip [n]", "Flip card n, or the focused card"),
    ("timer <min>|stop|reset", "Countdown timer"),
    ("stopwatch start|stop|reset", "Stopwatch"),
    ("progress <subject> <exam> <marks>", "Log an exam result"),
    ("show <panel>", "Switch panel"),
    ("logout", "Clear the session and quit"),
    ("quit / exit", "Quit"),
    ("help / ?", "Show this help"),
];

/// Result of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Ok(Option<String>),
    /// Command failed with an error message.
    Error(String),
    /// Switch to a panel.
    Show(Section),
    /// Run background work.
    Dispatch(Job),
    /// Dashboard should quit.
    Quit,
}

/// Parse and execute a command.
pub fn execute_command(session: &mut StudySession, input: &str) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Ok(None);
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();
    let args = &parts[1..];
    let rest = input[parts[0].len()..].trim_start();

    match command.as_str() {
        "save" | "upload" => cmd_save(rest),
        "files" | "list" => cmd_files(session),
        "view" => cmd_view(session, args),
        "delete" => cmd_delete(session, args),
        "summarize" | "summary" => cmd_summarize(session, args),
        "ask" => cmd_ask(session, args),
        "teach" => cmd_teach(session, args),
        "quiz" => cmd_quiz(session, args),
        "answer" | "pick" => cmd_answer(session, args),
        "clear" => cmd_clear(session, args),
        "grade" | "submit" => cmd_grade(session),
        "flashcards" | "cards" => cmd_flashcards(session, args),
        "flip" => cmd_flip(session, args),
        "timer" => cmd_timer(session, args),
        "stopwatch" => cmd_stopwatch(session, args),
        "progress" => cmd_progress(session, args),
        "show" => cmd_show(args),
        "logout" => cmd_logout(session),
        "quit" | "exit" => CommandResult::Quit,
        "help" | "?" => CommandResult::Show(Section::Help),
        _ => CommandResult::Error(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        )),
    }
}

fn failed(err: impl Into<StudyError>) -> CommandResult {
    CommandResult::Error(err.into().to_string())
}

fn cmd_save(rest: &str) -> CommandResult {
    let paths = split_paths(rest);
    if paths.is_empty() {
        return failed(NoteError::NoFiles);
    }
    CommandResult::Dispatch(Job::LoadNotes { paths })
}

/// Splits `save` arguments into paths. An argument string naming an existing
/// file is taken whole, otherwise paths are separated by whitespace and
/// double quotes group a path containing spaces.
fn split_paths(rest: &str) -> Vec<PathBuf> {
    if !rest.is_empty() && Path::new(rest).is_file() {
        return vec![PathBuf::from(rest)];
    }
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in rest.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(PathBuf::from(current));
    }
    paths
}

fn cmd_files(session: &StudySession) -> CommandResult {
    if session.notes.is_empty() {
        return CommandResult::Ok(Some("No notes saved.".to_string()));
    }
    CommandResult::Ok(Some(format!(
        "Saved notes: {}",
        session.notes.names().join(", ")
    )))
}

fn cmd_view(session: &mut StudySession, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: view <note>".to_string());
    }
    let name = args.join(" ");
    match session.notes.view(&name) {
        Ok(text) => {
            session.viewed_note = Some((name, text));
            CommandResult::Show(Section::Notes)
        }
        Err(err) => failed(err),
    }
}

fn cmd_delete(session: &mut StudySession, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: delete <note>".to_string());
    }
    let name = args.join(" ");
    match session.notes.delete(&name) {
        Ok(_) => {
            if session
                .viewed_note
                .as_ref()
                .is_some_and(|(viewed, _)| *viewed == name)
            {
                session.viewed_note = None;
            }
            CommandResult::Ok(Some(format!("Deleted: {}", name)))
        }
        Err(err) => failed(err),
    }
}

fn cmd_summarize(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let source = match session.notes.resolve(&args.join(" ")) {
        Ok(source) => source,
        Err(err) => return failed(err),
    };
    let ticket = session.summary.begin();
    CommandResult::Dispatch(Job::Summarize { ticket, source })
}

fn cmd_ask(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let question = args.join(" ");
    if question.is_empty() {
        return CommandResult::Error("Type a question.".to_string());
    }
    let ticket = session.tutor.begin();
    CommandResult::Dispatch(Job::Tutor {
        ticket,
        request: TutorRequest::Ask(question),
    })
}

fn cmd_teach(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let source = match session.notes.resolve(&args.join(" ")) {
        Ok(source) => source,
        Err(err) => return failed(err),
    };
    let ticket = session.tutor.begin();
    CommandResult::Dispatch(Job::Tutor {
        ticket,
        request: TutorRequest::Teach(source),
    })
}

/// `quiz <note> [n]`. A trailing number is the question count, unless the
/// whole argument names a note or file.
fn cmd_quiz(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let (source, count) = match session.notes.resolve(&args.join(" ")) {
        Ok(source) => (source, session.config().quiz_count),
        Err(err) => match args.split_last() {
            Some((last, rest)) if !rest.is_empty() && last.parse::<i64>().is_ok() => {
                let count = match last.parse::<usize>() {
                    Ok(count) if (1..=MAX_QUIZ_COUNT).contains(&count) => count,
                    _ => {
                        return CommandResult::Error(format!(
                            "Question count must be between 1 and {}.",
                            MAX_QUIZ_COUNT
                        ));
                    }
                };
                match session.notes.resolve(&rest.join(" ")) {
                    Ok(source) => (source, count),
                    Err(err) => return failed(err),
                }
            }
            _ => return failed(err),
        },
    };

    let ticket = session.quiz.begin();
    session.quiz_focus = 0;
    CommandResult::Dispatch(Job::Quiz {
        ticket,
        source,
        count,
    })
}

/// `answer <q> <A-D>`, with `q` counted from 1.
fn cmd_answer(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let [question, option] = args else {
        return CommandResult::Error("Usage: answer <question> <A-D>".to_string());
    };
    let Some(question) = question.parse::<usize>().ok().and_then(|q| q.checked_sub(1)) else {
        return CommandResult::Error(format!("Not a question number: {}", question));
    };
    let Some(option) = parse_option(option) else {
        return CommandResult::Error(format!("Not an option: {}", option));
    };
    let Some(quiz) = session.current_quiz_mut() else {
        return CommandResult::Error("Generate a quiz first.".to_string());
    };
    match quiz.select(question, option) {
        Ok(()) => {
            session.quiz_focus = question;
            CommandResult::Ok(None)
        }
        Err(err) => failed(err),
    }
}

fn cmd_clear(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let [question] = args else {
        return CommandResult::Error("Usage: clear <question>".to_string());
    };
    let Some(index) = question.parse::<usize>().ok().and_then(|q| q.checked_sub(1)) else {
        return CommandResult::Error(format!("Not a question number: {}", question));
    };
    let Some(quiz) = session.current_quiz_mut() else {
        return CommandResult::Error("Generate a quiz first.".to_string());
    };
    match quiz.clear_selection(index) {
        Ok(()) => {
            session.quiz_focus = index;
            CommandResult::Ok(None)
        }
        Err(err) => failed(err),
    }
}

/// Accepts an option letter or its 1-based number.
fn parse_option(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let c = c.to_ascii_uppercase();
    OPTION_LABELS
        .iter()
        .position(|label| *label == c)
        .or_else(|| c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)))
        .filter(|index| *index < OPTION_LABELS.len())
}

fn cmd_grade(session: &mut StudySession) -> CommandResult {
    if session.quiz_phase() == QuizPhase::Generating {
        return CommandResult::Error("The quiz is still being generated.".to_string());
    }
    let Some(quiz) = session.current_quiz_mut() else {
        return CommandResult::Error("Generate a quiz first.".to_string());
    };
    let summary = quiz.grade().summary();
    info!(quiz = %quiz.id(), result = %summary, "quiz graded");
    CommandResult::Ok(Some(summary))
}

fn cmd_flashcards(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let source = match session.notes.resolve(&args.join(" ")) {
        Ok(source) => source,
        Err(err) => return failed(err),
    };
    let ticket = session.flashcards.begin();
    let count = session.config().flashcard_count;
    CommandResult::Dispatch(Job::Flashcards {
        ticket,
        source,
        count,
    })
}

fn cmd_flip(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let Some(deck) = session.deck_mut() else {
        return CommandResult::Error("Generate flashcards first.".to_string());
    };
    let flipped = match args.first() {
        Some(n) => n
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .is_some_and(|index| deck.flip(index)),
        None => deck.flip_focused(),
    };
    if flipped {
        CommandResult::Ok(None)
    } else {
        CommandResult::Error(format!("No such card: {}", args.join(" ")))
    }
}

fn cmd_timer(session: &mut StudySession, args: &[&str]) -> CommandResult {
    match args.first().map(|a| a.to_lowercase()).as_deref() {
        None => CommandResult::Error("Usage: timer <minutes> | stop | reset".to_string()),
        Some("stop") => {
            session.countdown.stop();
            CommandResult::Ok(Some("Countdown stopped.".to_string()))
        }
        Some("reset") => {
            session.countdown.reset();
            CommandResult::Ok(Some("Countdown reset.".to_string()))
        }
        Some(minutes) => {
            let started = parse_minutes(minutes).and_then(|m| session.countdown.start(m));
            match started {
                Ok(()) => CommandResult::Ok(Some(format!(
                    "Countdown started: {}",
                    session.countdown.display()
                ))),
                Err(err) => failed(err),
            }
        }
    }
}

fn cmd_stopwatch(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let watch = &mut session.stopwatch;
    match args.first().map(|a| a.to_lowercase()).as_deref() {
        Some("start") => watch.start(),
        Some("stop") => watch.stop(),
        Some("reset") => watch.reset(),
        _ => return CommandResult::Error("Usage: stopwatch start | stop | reset".to_string()),
    }
    CommandResult::Ok(Some(format!("Stopwatch: {}", watch.display())))
}

/// `progress <subject> <exam> <marks>`. Words before the last two make up
/// the subject.
fn cmd_progress(session: &mut StudySession, args: &[&str]) -> CommandResult {
    let (subject, exam, marks) = match args {
        [subject @ .., exam, marks] if !subject.is_empty() => (subject.join(" "), *exam, *marks),
        _ => (String::new(), "", ""),
    };
    match session.progress.record(&subject, exam, marks) {
        Ok(entry) => CommandResult::Ok(Some(format!("Recorded: {}", entry))),
        Err(err) => failed(err),
    }
}

fn cmd_show(args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    match Section::parse(&name) {
        Some(section) => CommandResult::Show(section),
        None => CommandResult::Error(format!("Unknown panel: {}", name)),
    }
}

fn cmd_logout(session: &mut StudySession) -> CommandResult {
    session.reset();
    CommandResult::Quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::{Note, Source};
    use crate::jobs::Completion;
    use crate::models::Question;
    use crate::quiz::QuizInstance;

    fn session_with_note() -> StudySession {
        let mut session = StudySession::new(DashboardConfig::default());
        session.notes.save(vec![Note::new("bio.txt", "Cells divide.")]);
        session
    }

    fn load_quiz(session: &mut StudySession) {
        let ticket = session.quiz.begin();
        let question = Question {
            text: "Q1".into(),
            options: ["A", "B", "C", "D"].map(String::from),
            correct_index: 1,
        };
        session.apply(Completion::Quiz(
            ticket,
            Ok(QuizInstance::new(vec![question.clone(), question])),
        ));
    }

    #[test]
    fn test_empty_and_unknown_input() {
        let mut session = session_with_note();
        assert_eq!(execute_command(&mut session, "   "), CommandResult::Ok(None));
        assert!(matches!(
            execute_command(&mut session, "dance"),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_generation_needs_a_source() {
        let mut session = session_with_note();
        for input in ["summarize", "quiz", "flashcards", "teach", "quiz missing.txt"] {
            assert_eq!(
                execute_command(&mut session, input),
                CommandResult::Error("Select or upload a file.".to_string()),
                "{input}"
            );
        }
        assert!(!session.quiz.is_pending());
        assert!(!session.summary.is_pending());
    }

    #[test]
    fn test_quiz_dispatch_with_count() {
        let mut session = session_with_note();
        let CommandResult::Dispatch(Job::Quiz { source, count, .. }) =
            execute_command(&mut session, "quiz bio.txt 3")
        else {
            panic!("expected a quiz job");
        };
        assert_eq!(source, Source::Text("Cells divide.".into()));
        assert_eq!(count, 3);
        assert_eq!(session.quiz_phase(), QuizPhase::Generating);

        let CommandResult::Dispatch(Job::Quiz { count, .. }) =
            execute_command(&mut session, "quiz bio.txt")
        else {
            panic!("expected a quiz job");
        };
        assert_eq!(count, 5);
    }

    #[test]
    fn test_quiz_count_is_bounded() {
        let mut session = session_with_note();
        assert!(matches!(
            execute_command(&mut session, "quiz bio.txt 0"),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_command(&mut session, "quiz bio.txt 500"),
            CommandResult::Error(_)
        ));
        assert!(!session.quiz.is_pending());
    }

    #[test]
    fn test_answer_and_grade() {
        let mut session = session_with_note();
        assert_eq!(
            execute_command(&mut session, "grade"),
            CommandResult::Error("Generate a quiz first.".to_string())
        );

        load_quiz(&mut session);
        assert_eq!(execute_command(&mut session, "answer 1 b"), CommandResult::Ok(None));
        assert_eq!(execute_command(&mut session, "answer 2 1"), CommandResult::Ok(None));
        assert!(matches!(
            execute_command(&mut session, "answer 3 A"),
            CommandResult::Error(_)
        ));

        let graded = CommandResult::Ok(Some("Score: 1/2 (50%)".to_string()));
        assert_eq!(execute_command(&mut session, "submit"), graded);
        assert_eq!(execute_command(&mut session, "grade"), graded);
        assert!(matches!(
            execute_command(&mut session, "answer 2 B"),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("a"), Some(0));
        assert_eq!(parse_option("D"), Some(3));
        assert_eq!(parse_option("2"), Some(1));
        assert_eq!(parse_option("E"), None);
        assert_eq!(parse_option("5"), None);
        assert_eq!(parse_option("0"), None);
        assert_eq!(parse_option("AB"), None);
    }

    #[test]
    fn test_ask_requires_question() {
        let mut session = session_with_note();
        assert!(matches!(execute_command(&mut session, "ask"), CommandResult::Error(_)));
        assert!(matches!(
            execute_command(&mut session, "ask what is mitosis?"),
            CommandResult::Dispatch(Job::Tutor {
                request: TutorRequest::Ask(_),
                ..
            })
        ));
    }

    #[test]
    fn test_note_commands() {
        let mut session = session_with_note();
        assert_eq!(
            execute_command(&mut session, "save"),
            CommandResult::Error("Select at least one file to save.".to_string())
        );
        assert_eq!(
            execute_command(&mut session, "view bio.txt"),
            CommandResult::Show(Section::Notes)
        );
        assert_eq!(
            session.viewed_note,
            Some(("bio.txt".to_string(), "Cells divide.".to_string()))
        );
        assert_eq!(
            execute_command(&mut session, "delete bio.txt"),
            CommandResult::Ok(Some("Deleted: bio.txt".to_string()))
        );
        assert!(session.viewed_note.is_none());
        assert_eq!(
            execute_command(&mut session, "files"),
            CommandResult::Ok(Some("No notes saved.".to_string()))
        );
    }

    #[test]
    fn test_save_path_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("My Notes.txt");
        std::fs::write(&path, "notes").unwrap();

        let mut session = session_with_note();
        assert_eq!(
            execute_command(&mut session, &format!("save {}", path.display())),
            CommandResult::Dispatch(Job::LoadNotes {
                paths: vec![path.clone()]
            })
        );
    }

    #[test]
    fn test_split_paths_honours_quotes() {
        assert_eq!(
            split_paths(r#"a.txt "Chapter 3.rtf"  b.txt"#),
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("Chapter 3.rtf"),
                PathBuf::from("b.txt")
            ]
        );
        assert!(split_paths("").is_empty());
        assert!(split_paths(r#""""#).is_empty());
    }

    #[test]
    fn test_quiz_prefers_note_named_with_number() {
        let mut session = session_with_note();
        session.notes.save(vec![Note::new("Chapter 3", "Plate tectonics.")]);

        let CommandResult::Dispatch(Job::Quiz { source, count, .. }) =
            execute_command(&mut session, "quiz Chapter 3")
        else {
            panic!("expected a quiz job");
        };
        assert_eq!(source, Source::Text("Plate tectonics.".into()));
        assert_eq!(count, 5);

        let CommandResult::Dispatch(Job::Quiz { source, count, .. }) =
            execute_command(&mut session, "quiz Chapter 3 2")
        else {
            panic!("expected a quiz job");
        };
        assert_eq!(source, Source::Text("Plate tectonics.".into()));
        assert_eq!(count, 2);
    }

    #[test]
    fn test_clear_answer() {
        let mut session = session_with_note();
        assert_eq!(
            execute_command(&mut session, "clear 1"),
            CommandResult::Error("Generate a quiz first.".to_string())
        );

        load_quiz(&mut session);
        execute_command(&mut session, "answer 2 C");
        assert_eq!(execute_command(&mut session, "clear 2"), CommandResult::Ok(None));
        assert_eq!(session.current_quiz().unwrap().answered_count(), 0);
        assert!(matches!(
            execute_command(&mut session, "clear 9"),
            CommandResult::Error(_)
        ));

        execute_command(&mut session, "grade");
        assert_eq!(
            execute_command(&mut session, "clear 1"),
            CommandResult::Error(
                "Quiz already graded. Generate a new quiz to try again.".to_string()
            )
        );
    }

    #[test]
    fn test_timer_commands() {
        let mut session = session_with_note();
        assert_eq!(
            execute_command(&mut session, "timer 25"),
            CommandResult::Ok(Some("Countdown started: 25:00".to_string()))
        );
        assert!(matches!(
            execute_command(&mut session, "timer -1"),
            CommandResult::Error(_)
        ));
        assert!(session.countdown.is_running());
        execute_command(&mut session, "timer stop");
        assert!(!session.countdown.is_running());

        assert_eq!(
            execute_command(&mut session, "stopwatch start"),
            CommandResult::Ok(Some("Stopwatch: 00:00:00".to_string()))
        );
        assert!(session.stopwatch.is_running());
    }

    #[test]
    fn test_progress_command() {
        let mut session = session_with_note();
        assert_eq!(
            execute_command(&mut session, "progress Organic Chemistry Midterm 88"),
            CommandResult::Ok(Some(
                "Recorded: Organic Chemistry - Midterm: 88 marks".to_string()
            ))
        );
        assert_eq!(
            execute_command(&mut session, "progress Math 88"),
            CommandResult::Error("Please fill in all fields.".to_string())
        );
        assert_eq!(session.progress.len(), 1);
    }

    #[test]
    fn test_logout_clears_and_quits() {
        let mut session = session_with_note();
        assert_eq!(execute_command(&mut session, "logout"), CommandResult::Quit);
        assert!(session.notes.is_empty());
    }
}
