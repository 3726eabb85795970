use ratatui::layout::Rect;

/// Height of the fixed navigation bar.
pub const NAV_HEIGHT: u16 = 3;
/// Height of the key hint line at the bottom of the screen.
pub const HINT_HEIGHT: u16 = 1;

/// Split the screen into navigation bar, scrolling body and hint line.
pub fn screen_regions(area: Rect) -> (Rect, Rect, Rect) {
    let nav_height = area.height.min(NAV_HEIGHT);
    let hint_height = HINT_HEIGHT.min(area.height.saturating_sub(nav_height));
    let nav = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: nav_height,
    };
    let hints = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(hint_height),
        width: area.width,
        height: hint_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + nav_height,
        width: area.width,
        height: area.height.saturating_sub(nav_height + hint_height),
    };
    (nav, body, hints)
}

pub fn body_rect(area: Rect) -> Rect {
    screen_regions(area).1
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// One-row rect of `width` cells centered horizontally in `area` at row `y`.
pub fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y,
        width,
        height: 1,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
