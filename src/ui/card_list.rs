use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::home::{CardView, HomeScreenState};
use crate::ui::layout::card_rects;
use crate::ui::theme::{
    BRAND_GREEN, CARD_BACKGROUND, CARD_BORDER, DESCRIPTION_TEXT, IMAGE_TEXT, TAG_BACKGROUND,
    TITLE_TEXT,
};

/// Draw the visible cards of the list into `body`.
pub fn draw_cards(frame: &mut Frame<'_>, body: Rect, state: &HomeScreenState) {
    for (index, area) in card_rects(body, state.items.len(), state.scroll) {
        let card = CardView::from_item(&state.items[index]);
        frame.render_widget(card_widget(&card, area, index == state.selected), area);
    }
}

pub fn card_widget<'a>(card: &CardView<'a>, area: Rect, selected: bool) -> Paragraph<'a> {
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("▣ ", Style::default().fg(IMAGE_TEXT)),
            Span::styled(
                card.image_url,
                Style::default().fg(IMAGE_TEXT).add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(Span::styled(
            card.title,
            Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {} ", card.category),
            Style::default().fg(BRAND_GREEN).bg(TAG_BACKGROUND),
        )),
    ];
    lines.extend(
        card.description_lines(inner_width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(DESCRIPTION_TEXT)))),
    );

    let border = if selected {
        Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CARD_BORDER)
    };

    Paragraph::new(lines)
        .style(Style::default().bg(CARD_BACKGROUND))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
}
