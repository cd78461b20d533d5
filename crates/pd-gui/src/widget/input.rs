//! Single-line text input field with blinking cursor.
//!
//! Rendering only — character insertion and deletion are handled by
//! the screen's update pass, which owns the field text.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, palette};

/// Draw a text input field.
///
/// `active` selects the highlighted border and the blinking cursor;
/// `placeholder` is shown dimmed when the field is empty.
pub fn draw_input(value: &str, placeholder: &str, active: bool, area: &Rect2) {
    let fill = if active {
        palette::BLACK
    } else {
        palette::DARK_BLUE
    };
    let border = if active {
        palette::YELLOW
    } else {
        palette::DARK_GRAY
    };
    super::bordered_rect(area.x, area.y, area.w, area.h, fill, border);

    let text_x = area.x + 6.0;
    let text_y = area.y + (area.h - TEXT_SIZE * 0.75) / 2.0;

    if value.is_empty() && !active {
        super::draw_label(placeholder, text_x, text_y, TEXT_SIZE, palette::DARK_GRAY);
        return;
    }

    let color = if active {
        palette::WHITE
    } else {
        palette::LIGHT_GRAY
    };
    super::draw_label(value, text_x, text_y, TEXT_SIZE, color);

    if active {
        let cursor_phase = (get_time() * 3.0) as u32 % 2;
        if cursor_phase == 0 {
            let cursor_x = text_x + super::text_width(value, TEXT_SIZE) + 1.0;
            draw_rectangle(cursor_x, text_y, 2.0, TEXT_SIZE * 0.75, palette::YELLOW);
        }
    }
}
