use crate::ui::app::App;
use crate::ui::badge::Badge;
use crate::ui::card_list::draw_cards;
use crate::ui::footer::key_legend;
use crate::ui::header::Header;
use crate::ui::layout::{badge_rect, layout_regions};
use crate::ui::theme::SCREEN_BACKGROUND;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(SCREEN_BACKGROUND)),
        area,
    );

    let header_text = app.header_text();
    frame.render_widget(Header::new(&header_text).widget(), header);

    draw_cards(frame, body, app.home());

    frame.render_widget(key_legend(), footer);

    // Badge floats above the list.
    let count = app.click_count();
    let badge = badge_rect(body, count);
    if badge.width > 0 && badge.height > 0 {
        frame.render_widget(Clear, badge);
        frame.render_widget(Badge::new(count).widget(), badge);
    }
}
