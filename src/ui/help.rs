use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::commands::COMMAND_HELP;

const KEYS: &[(&str, &str)] = &[
    ("tab / shift-tab", "Next / previous panel"),
    ("up / down", "Focus a question or card, or scroll"),
    ("left / right", "Choose an option, or flip a card"),
    ("esc", "Clear the command line"),
    ("ctrl-c", "Quit"),
];

/// Render the help view.
pub fn render(frame: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "COMMANDS",
            Style::default().fg(Color::Cyan).bold(),
        )),
    ];
    help_text.extend(COMMAND_HELP.iter().map(|(usage, about)| entry(usage, about)));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "KEYS",
        Style::default().fg(Color::Cyan).bold(),
    )));
    help_text.extend(KEYS.iter().map(|(key, about)| entry(key, about)));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Press Esc or Enter to close",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Help ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(widget, area);
}

fn entry<'a>(usage: &'a str, about: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<36}", usage), Style::default().fg(Color::Yellow)),
        Span::raw(about),
    ])
}
