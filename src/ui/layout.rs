use ratatui::layout::{Position, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Border, image, title, tag, two description rows, border.
pub const CARD_HEIGHT: u16 = 7;
pub const CARD_GAP: u16 = 1;
/// Horizontal padding around the card list.
pub const LIST_PADDING: u16 = 1;
pub const BADGE_MIN_WIDTH: u16 = 9;
pub const BADGE_HEIGHT: u16 = 3;
pub const BADGE_MARGIN_X: u16 = 2;
pub const BADGE_MARGIN_Y: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// The card column inside the body.
pub fn list_rect(body: Rect) -> Rect {
    let pad = LIST_PADDING.min(body.width / 2);
    Rect {
        x: body.x + pad,
        y: body.y,
        width: body.width.saturating_sub(pad * 2),
        height: body.height,
    }
}

/// How many whole cards fit in the body (at least one).
pub fn viewport_cards(body: Rect) -> usize {
    let stride = CARD_HEIGHT + CARD_GAP;
    (((body.height + CARD_GAP) / stride) as usize).max(1)
}

/// Visible cards as `(item index, area)`, starting at `scroll`. The last card
/// may be clipped by the bottom of the body.
pub fn card_rects(body: Rect, count: usize, scroll: usize) -> Vec<(usize, Rect)> {
    let list = list_rect(body);
    let bottom = list.bottom();
    let mut rects = Vec::new();
    let mut y = list.y;
    for index in scroll..count {
        if y >= bottom || list.width == 0 {
            break;
        }
        let height = CARD_HEIGHT.min(bottom - y);
        rects.push((
            index,
            Rect {
                x: list.x,
                y,
                width: list.width,
                height,
            },
        ));
        y = y.saturating_add(CARD_HEIGHT + CARD_GAP);
    }
    rects
}

/// Floating counter badge, anchored to the bottom-right of the body.
pub fn badge_rect(body: Rect, count: u64) -> Rect {
    let digits = count.to_string().chars().count() as u16;
    let width = BADGE_MIN_WIDTH.max(digits + 4);
    let right = body.right().saturating_sub(BADGE_MARGIN_X);
    let bottom = body.bottom().saturating_sub(BADGE_MARGIN_Y);
    let rect = Rect {
        x: right.saturating_sub(width).max(body.x),
        y: bottom.saturating_sub(BADGE_HEIGHT).max(body.y),
        width,
        height: BADGE_HEIGHT,
    };
    rect.intersection(body)
}

/// The card under `(x, y)`, if any. The badge sits on top of the list, so a
/// click on it never reaches a card.
pub fn card_at(
    body: Rect,
    count: usize,
    scroll: usize,
    badge_count: u64,
    x: u16,
    y: u16,
) -> Option<usize> {
    let point = Position::new(x, y);
    if badge_rect(body, badge_count).contains(point) {
        return None;
    }
    card_rects(body, count, scroll)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(index, _)| index)
}
