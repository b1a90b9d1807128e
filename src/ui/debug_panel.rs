//! Realtime debug panel
//!
//! Read-only view of the running simulation. The only thing it can change
//! is the player speed, and it does so by returning the slider value for
//! the caller to apply through the gameplay's bounded setter.

use macroquad::prelude::*;
use crate::game::Gameplay;
use super::{
    Rect, UiContext, draw_panel, panel_content_rect, slider,
    PANEL_BG, TEXT_COLOR, TEXT_DIM, FONT_SIZE_CONTENT, ROW_HEIGHT, SLIDER_ROW_HEIGHT,
};

pub const DEBUG_PANEL_WIDTH: f32 = 220.0;

/// Text lines shown in the panel, in display order.
/// Headings are `(true, text)`.
pub fn debug_lines(game: &Gameplay) -> Vec<(bool, String)> {
    let p = game.player.position;
    let s = &game.stats;
    vec![
        (true, "Player Position:".to_string()),
        (false, format!("X: {:.2}", p.x)),
        (false, format!("Y: {:.2}", p.y)),
        (false, format!("Z: {:.2}", p.z)),
        (true, "Player Stats:".to_string()),
        (false, format!("Score: {}", s.score)),
        (false, format!("Hits: {}", s.hits)),
        (false, format!("Keystrokes: {}", s.keystrokes)),
        (false, format!("Collisions: {} / 3", s.collisions)),
    ]
}

/// Panel height for a given number of text lines
pub fn debug_panel_height(lines: usize) -> f32 {
    super::TITLE_HEIGHT + 8.0 + lines as f32 * ROW_HEIGHT + SLIDER_ROW_HEIGHT
}

/// Draw the panel at (x, y). Returns a new player speed while the slider is dragged.
pub fn draw_debug_panel(ctx: &mut UiContext, x: f32, y: f32, game: &Gameplay) -> Option<f32> {
    let lines = debug_lines(game);
    let rect = Rect::new(x, y, DEBUG_PANEL_WIDTH, debug_panel_height(lines.len()));
    draw_panel(rect, Some("Realtime Panel"), PANEL_BG);

    let mut content = panel_content_rect(rect, true);
    for (heading, text) in &lines {
        let row = content.slice_top(ROW_HEIGHT);
        let color = if *heading { TEXT_DIM } else { TEXT_COLOR };
        draw_text(text, row.x, row.y + 14.0, FONT_SIZE_CONTENT, color);
        content = content.remaining_after_top(ROW_HEIGHT);
    }

    slider(
        ctx,
        content.slice_top(SLIDER_ROW_HEIGHT),
        "Player Speed",
        game.player.speed,
        0.0,
        game.max_slider_speed(),
    )
}
