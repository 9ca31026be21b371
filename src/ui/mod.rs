mod flashcards;
mod help;
mod notes;
mod progress;
mod quiz;
mod reply;
mod result;
mod timer;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::models::Section;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(8),    // Panel
        Constraint::Length(2), // Status line
        Constraint::Length(3), // Command input
    ])
    .split(area);

    render_header(frame, chunks[0], app);
    render_section(frame, chunks[1], app);
    render_status(frame, chunks[2], app);
    render_command_input(frame, chunks[3], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .title(format!(" Welcome, {} ", app.session.user()))
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs_area, clocks_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(36)]).areas(inner);

    let selected = Section::TABS
        .iter()
        .position(|section| *section == app.section)
        .unwrap_or(0);
    let tabs = Tabs::new(Section::TABS.iter().map(|section| section.title()))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(tabs, tabs_area);

    let session = &app.session;
    let clocks = Paragraph::new(format!(
        "Timer {}  Stopwatch {}",
        session.countdown.display(),
        session.stopwatch.display()
    ))
    .alignment(Alignment::Right)
    .fg(if session.countdown.is_running() {
        Color::Yellow
    } else {
        Color::DarkGray
    });
    frame.render_widget(clocks, clocks_area);
}

fn render_section(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    match app.section {
        Section::Notes => notes::render(frame, area, session, app.scroll),
        Section::Summary => reply::render(
            frame,
            area,
            " Summary ",
            &session.summary,
            "summarize <note> to summarize a note.",
            app.scroll,
        ),
        Section::Tutor => reply::render(
            frame,
            area,
            " Tutor ",
            &session.tutor,
            "ask <question>, or teach <note> to go through a note.",
            app.scroll,
        ),
        Section::Quiz => quiz::render(frame, area, session),
        Section::Flashcards => flashcards::render(frame, area, session),
        Section::Timer => timer::render(frame, area, session),
        Section::Progress => progress::render(frame, area, &session.progress),
        Section::Help => help::render(frame, area),
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status.as_deref().unwrap_or("");
    let color = if status.starts_with("Error") {
        Color::Red
    } else {
        Color::DarkGray
    };

    let widget = Paragraph::new(status)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::TOP).border_style(Color::DarkGray));
    frame.render_widget(widget, area);
}

/// Render the command input bar.
fn render_command_input(frame: &mut Frame, area: Rect, app: &App) {
    let input_text = format!("> {}", app.command_input);

    let input = Paragraph::new(input_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(input, area);

    let cursor_x = area.x + 3 + app.command_input.chars().count() as u16;
    let cursor_y = area.y + 1;
    frame.set_cursor_position(Position::new(cursor_x, cursor_y));
}

/// Shortens `text` to `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let truncated: String = text.chars().take(max).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
