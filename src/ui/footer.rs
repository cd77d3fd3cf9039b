use crate::ui::theme::{BRAND_GREEN, CARD_BORDER, FOOTER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Key legend for the item list: (keys, action).
const BINDINGS: [(&str, &str); 4] = [
    ("↑/↓", "select"),
    ("Enter", "tap"),
    ("click", "tap"),
    ("q", "quit"),
];

/// Centred key legend under a rule separating it from the cards.
pub fn key_legend() -> Paragraph<'static> {
    let key_style = Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(FOOTER_TEXT);

    let mut spans = Vec::with_capacity(BINDINGS.len() * 3);
    for (i, (keys, action)) in BINDINGS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", label_style));
        }
        spans.push(Span::styled(*keys, key_style));
        spans.push(Span::styled(format!(" {action}"), label_style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(CARD_BORDER)),
        )
}
