//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext, SLIDER_TRACK, SLIDER_FILL, SLIDER_HANDLE, TEXT_COLOR, FONT_SIZE_CONTENT};

/// Vertical space a slider row takes, label included
pub const SLIDER_ROW_HEIGHT: f32 = 40.0;

/// Map a mouse x position on a track to a value in `min..=max`
pub fn slider_value(track: &Rect, mouse_x: f32, min: f32, max: f32) -> f32 {
    if track.w <= 0.0 {
        return min;
    }
    let t = ((mouse_x - track.x) / track.w).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// Fraction of the track that `value` fills
pub fn slider_fraction(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Labelled horizontal slider. Returns the new value while the user drags it.
///
/// The drag starts on a press inside the (enlarged) track and keeps
/// following the mouse until the button is released, even off the track.
pub fn slider(
    ctx: &mut UiContext,
    rect: Rect,
    label: &str,
    value: f32,
    min: f32,
    max: f32,
) -> Option<f32> {
    let id = ctx.next_id();

    draw_text(label, rect.x, rect.y + 14.0, FONT_SIZE_CONTENT, TEXT_COLOR);

    let value_text = format!("{:.2}", value);
    let value_w = 48.0;
    let track = Rect::new(rect.x, rect.y + 24.0, (rect.w - value_w - 8.0).max(0.0), 8.0);

    // Background track
    draw_rectangle(track.x, track.y, track.w, track.h, SLIDER_TRACK);

    // Filled portion
    let fill_w = slider_fraction(value, min, max) * track.w;
    draw_rectangle(track.x, track.y, fill_w, track.h, SLIDER_FILL);

    // Handle
    draw_circle(track.x + fill_w, track.center_y(), 7.0, SLIDER_HANDLE);

    draw_text(&value_text, track.right() + 8.0, track.y + 8.0, FONT_SIZE_CONTENT, TEXT_COLOR);

    if ctx.mouse.clicked(&track.expand(8.0)) {
        ctx.start_drag(id);
    }

    if ctx.is_dragging(id) {
        Some(slider_value(&track, ctx.mouse.x, min, max))
    } else {
        None
    }
}
