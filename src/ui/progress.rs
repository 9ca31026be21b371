use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::progress::ProgressLog;

pub fn render(frame: &mut Frame, area: Rect, log: &ProgressLog) {
    let mut lines: Vec<Line> = log
        .entries()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(" - ", Style::default().fg(Color::DarkGray)),
                Span::styled(entry.to_string(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from("No results logged yet.".fg(Color::DarkGray)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        "progress <subject> <exam> <marks>".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Progress ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
