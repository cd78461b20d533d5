//! Bordered panel with an optional title bar.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, palette};

/// Draw a bordered panel.
pub fn draw_panel(area: &Rect2) {
    super::bordered_rect(
        area.x,
        area.y,
        area.w,
        area.h,
        palette::DARK_BLUE,
        palette::LIGHT_GRAY,
    );
}

/// Draw a panel with a centered title bar along its top edge.
///
/// Content should start below `area.y + 34.0`.
pub fn draw_panel_titled(area: &Rect2, title: &str) {
    draw_panel(area);
    draw_rectangle(
        area.x + 2.0,
        area.y + 2.0,
        area.w - 4.0,
        30.0,
        palette::BLACK,
    );
    super::draw_label_centered(title, area.center_x(), area.y + 6.0, TEXT_SIZE, palette::WHITE);
}
