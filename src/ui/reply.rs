//! Model replies shown as text: the summary and tutor panels.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::session::Slot;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    slot: &Slot<String>,
    hint: &str,
    scroll: u16,
) {
    let lines = match slot.get() {
        _ if slot.is_pending() => vec![Line::from("Working...".fg(Color::Yellow))],
        Some(Ok(text)) => reply_lines(text),
        Some(Err(err)) => vec![Line::from(err.to_string().fg(Color::Red))],
        None => vec![Line::from(hint.fg(Color::DarkGray))],
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(title)
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

/// Styles markdown-ish headings and bullets.
fn reply_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if let Some(heading) = trimmed.strip_prefix('#') {
                Line::from(Span::styled(
                    heading.trim_start_matches('#').trim(),
                    Style::default().fg(Color::Cyan).bold(),
                ))
            } else if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                Line::from(vec![
                    Span::styled("  • ", Style::default().fg(Color::DarkGray)),
                    Span::raw(item),
                ])
            } else {
                Line::from(line)
            }
        })
        .collect()
}
