//! Small immediate-mode widget toolkit: rects, text helpers, panels,
//! buttons, and the amount input field.

pub mod button;
pub mod input;
pub mod panel;

use macroquad::prelude::*;

/// A rectangular area for layout and hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Horizontal center of the rect.
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }
}

/// Draw a 1-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(x: f32, y: f32, w: f32, h: f32, fill: Color, border: Color) {
    draw_rectangle(x, y, w, h, fill);
    draw_rectangle(x, y, w, 1.0, border);
    draw_rectangle(x, y + h - 1.0, w, 1.0, border);
    draw_rectangle(x, y, 1.0, h, border);
    draw_rectangle(x + w - 1.0, y, 1.0, h, border);
}

/// Pixel width of `text` at the given size.
pub fn text_width(text: &str, size: f32) -> f32 {
    measure_text(text, None, size as u16, 1.0).width
}

/// Draw text with `y` as the top edge rather than the baseline.
pub fn draw_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y + size * 0.75, size, color);
}

/// Draw text horizontally centered on `cx`, with `y` as the top edge.
pub fn draw_label_centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    draw_label(text, cx - text_width(text, size) / 2.0, y, size, color);
}
