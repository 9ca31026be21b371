use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::OPTION_LABELS;
use crate::quiz::{display_options, QuizInstance, QuizPhase};
use crate::session::StudySession;

use super::result;

/// Lines one question takes: text, four options, a blank.
const QUESTION_HEIGHT: usize = 6;

pub fn render(frame: &mut Frame, area: Rect, session: &StudySession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(" Quiz ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let quiz = match (session.quiz_phase(), session.quiz.get()) {
        (QuizPhase::Generating, _) => {
            return render_message(frame, area, block, "Generating quiz...", Color::Yellow);
        }
        (_, Some(Err(err))) => {
            return render_message(frame, area, block, &err.to_string(), Color::Red);
        }
        (_, Some(Ok(quiz))) => quiz,
        (_, None) => {
            return render_message(
                frame,
                area,
                block,
                "quiz <note> [n] to generate questions.",
                Color::DarkGray,
            );
        }
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = match quiz.report() {
        Some(_) => Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner),
        None => Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner),
    };

    match quiz.report() {
        Some(report) => result::render(frame, chunks[0], report),
        None => render_progress(frame, chunks[0], quiz),
    }
    render_questions(frame, chunks[1], quiz, session.quiz_focus);
    render_controls(frame, chunks[2], quiz.is_graded());
}

fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str, color: Color) {
    let widget = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .fg(color)
        .block(block);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, quiz: &QuizInstance) {
    let progress = format!("{}/{} answered", quiz.answered_count(), quiz.len());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_questions(frame: &mut Frame, area: Rect, quiz: &QuizInstance, focus: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(quiz.len() * QUESTION_HEIGHT);

    for (index, question) in quiz.questions().iter().enumerate() {
        let focused = index == focus;
        let marker = if focused { ">" } else { " " };
        let text_style = if focused {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}. {}", index + 1, question.text), text_style),
        ]));

        let selected = quiz.selection(index);
        for (option_index, option) in display_options(question).iter().enumerate() {
            let style = option_style(
                option_index,
                selected,
                question.correct_index,
                quiz.is_graded(),
            );
            let radio = if selected == Some(option_index) { "(x)" } else { "( )" };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{} {}. {}", radio, OPTION_LABELS[option_index], option),
                    style,
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    // Keep the focused question on screen.
    let height = area.height as usize;
    let offset = (focus * QUESTION_HEIGHT + QUESTION_HEIGHT).saturating_sub(height);
    let widget = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(widget, area);
}

/// After grading the correct option is green and a wrong pick red.
fn option_style(option: usize, selected: Option<usize>, correct: usize, graded: bool) -> Style {
    if graded && option == correct {
        Style::default().fg(Color::Green).bold()
    } else if graded && selected == Some(option) {
        Style::default().fg(Color::Red)
    } else if selected == Some(option) {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_controls(frame: &mut Frame, area: Rect, graded: bool) {
    let text = if graded {
        "up/down scroll  ·  quiz <note> for a new quiz"
    } else {
        "up/down question  ·  left/right choose  ·  grade to finish"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
