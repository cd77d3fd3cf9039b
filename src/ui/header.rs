use crate::ui::theme::{BRAND_GREEN, ON_BRAND};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};

/// Green welcome bar across the top of the screen.
pub struct Header<'a> {
    text: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let style = Style::default()
            .fg(ON_BRAND)
            .bg(BRAND_GREEN)
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(self.text))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().padding(Padding::vertical(1)))
    }
}
