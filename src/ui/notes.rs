use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::session::StudySession;

use super::truncate;

const NAME_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, session: &StudySession, scroll: u16) {
    let [list_area, text_area] =
        Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)]).areas(area);

    render_list(frame, list_area, session);
    match &session.viewed_note {
        Some((name, text)) => render_note(frame, text_area, name, text, scroll),
        None => render_welcome(frame, text_area, session.user()),
    }
}

fn render_list(frame: &mut Frame, area: Rect, session: &StudySession) {
    let viewed = session.viewed_note.as_ref().map(|(name, _)| name.as_str());
    let lines: Vec<Line> = if session.notes.is_empty() {
        vec![Line::from("No notes saved.".fg(Color::DarkGray))]
    } else {
        session
            .notes
            .list()
            .map(|note| {
                let style = if viewed == Some(note.name()) {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(truncate(note.name(), NAME_WIDTH), style),
                    Span::styled(format!(" {}B", note.size()), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" Notes ({}) ", session.notes.len()))
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

fn render_note(frame: &mut Frame, area: Rect, name: &str, text: &str, scroll: u16) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(format!(" {} ", name))
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_welcome(frame: &mut Frame, area: Rect, user: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "STUDY DASHBOARD",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("Hello, {}", user).fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            "save <path>",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to add notes  ·  help for commands".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
