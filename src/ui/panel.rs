//! Panel drawing helpers

use macroquad::prelude::*;
use super::{Rect, PANEL_BORDER, HEADER_COLOR, TITLE_HEIGHT};

/// Draw a panel background with optional title
pub fn draw_panel(rect: Rect, title: Option<&str>, bg_color: Color) {
    // Background
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg_color);

    // Border
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, PANEL_BORDER);

    // Title bar if provided
    if let Some(title) = title {
        draw_rectangle(rect.x, rect.y, rect.w, TITLE_HEIGHT, HEADER_COLOR);
        draw_text(title, rect.x + 5.0, rect.y + 14.0, 16.0, WHITE);
    }
}

/// Get the content area of a panel (after title bar)
pub fn panel_content_rect(rect: Rect, has_title: bool) -> Rect {
    if has_title {
        rect.remaining_after_top(TITLE_HEIGHT).pad(4.0)
    } else {
        rect.pad(4.0)
    }
}
