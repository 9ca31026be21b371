use ratatui::{
    prelude::*,
    widgets::{Borders, Block, Paragraph},
};

use crate::quiz::GradeReport;

pub fn render(frame: &mut Frame, area: Rect, report: &GradeReport) {
    let color = grade_color(report.percent);
    let content = vec![
        Line::from(Span::styled("RESULTS", Style::default().fg(Color::Cyan).bold())),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", report.correct, report.total, report.percent),
            Style::default().fg(color).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn grade_color(percent: u32) -> Color {
    match percent {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
