//! Clickable button widget with hover and pressed states.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, palette};

/// Draw a button and return true if it was clicked this frame.
pub fn draw_button(label: &str, area: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    let hovered = area.contains(mouse_x, mouse_y);
    let clicked = hovered && is_mouse_button_pressed(MouseButton::Left);

    let (fill, border, text_color) = if clicked {
        (palette::DARK_GRAY, palette::WHITE, palette::YELLOW)
    } else if hovered {
        (palette::DARK_BLUE, palette::YELLOW, palette::YELLOW)
    } else {
        (palette::DARK_BLUE, palette::LIGHT_GRAY, palette::WHITE)
    };

    super::bordered_rect(area.x, area.y, area.w, area.h, fill, border);

    let text_w = super::text_width(label, TEXT_SIZE);
    let tx = area.x + (area.w - text_w) / 2.0;
    let ty = area.y + (area.h - TEXT_SIZE * 0.75) / 2.0;
    super::draw_label(label, tx, ty, TEXT_SIZE, text_color);

    clicked
}
