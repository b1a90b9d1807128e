//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

/// Panel background (slightly see-through so the track stays visible)
pub const PANEL_BG: Color = Color::new(0.11, 0.11, 0.13, 0.85);

/// Panel border
pub const PANEL_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0);

/// Title bar background
pub const HEADER_COLOR: Color = Color::new(0.196, 0.196, 0.235, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Section headings
pub const TEXT_DIM: Color = Color::new(0.59, 0.59, 0.63, 1.0);

/// Slider track
pub const SLIDER_TRACK: Color = Color::new(0.157, 0.165, 0.188, 1.0);

/// Slider filled portion
pub const SLIDER_FILL: Color = Color::new(0.314, 0.549, 0.784, 1.0);

/// Slider handle
pub const SLIDER_HANDLE: Color = Color::new(0.392, 0.706, 1.0, 1.0);

/// Title bar height
pub const TITLE_HEIGHT: f32 = 20.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Height of one text row
pub const ROW_HEIGHT: f32 = 18.0;
