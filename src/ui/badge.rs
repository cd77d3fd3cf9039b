use crate::ui::theme::{BRAND_GREEN, ON_BRAND};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Floating round-ish button showing the tap count.
pub struct Badge {
    count: u64,
}

impl Badge {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let style = Style::default().fg(ON_BRAND).bg(BRAND_GREEN);
        Paragraph::new(Line::from(self.count.to_string()).style(style.add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
    }
}
