use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::StudySession;

pub fn render(frame: &mut Frame, area: Rect, session: &StudySession) {
    let [countdown_area, stopwatch_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    render_clock(
        frame,
        countdown_area,
        " Countdown ",
        &session.countdown.display(),
        session.countdown.is_running(),
        "timer <minutes>  ·  timer stop  ·  timer reset",
    );
    render_clock(
        frame,
        stopwatch_area,
        " Stopwatch ",
        &session.stopwatch.display(),
        session.stopwatch.is_running(),
        "stopwatch start  ·  stop  ·  reset",
    );
}

fn render_clock(frame: &mut Frame, area: Rect, title: &str, time: &str, running: bool, usage: &str) {
    let (state, color) = if running {
        ("running", Color::Green)
    } else {
        ("stopped", Color::DarkGray)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(time, Style::default().fg(Color::Cyan).bold())),
        Line::from(state.fg(color)),
        Line::from(""),
        Line::from(usage.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}
