use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::flashcards::Deck;
use crate::session::StudySession;

pub fn render(frame: &mut Frame, area: Rect, session: &StudySession) {
    let lines = match session.flashcards.get() {
        _ if session.flashcards.is_pending() => {
            vec![Line::from("Generating flashcards...".fg(Color::Yellow))]
        }
        Some(Ok(deck)) => card_lines(deck),
        Some(Err(err)) => vec![Line::from(err.to_string().fg(Color::Red))],
        None => vec![Line::from(
            "flashcards <note> to generate cards.".fg(Color::DarkGray),
        )],
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Flashcards ")
            .title_style(Style::default().fg(Color::Cyan))
            .title_bottom(Line::from(" up/down card  ·  left/right flip ").centered())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn card_lines(deck: &Deck) -> Vec<Line<'_>> {
    deck.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let marker = if index == deck.focused() { ">" } else { " " };
            let (side, color) = if card.flipped {
                ("A", Color::Green)
            } else {
                ("Q", Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:2}. [{}] ", index + 1, side), Style::default().fg(Color::DarkGray)),
                Span::styled(card.visible_text(), Style::default().fg(color)),
            ])
        })
        .collect()
}
