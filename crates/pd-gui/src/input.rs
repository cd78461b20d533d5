//! Keyboard input helpers.

use macroquad::prelude::*;

/// Collect all printable characters typed this frame.
pub fn typed_chars() -> Vec<char> {
    let mut chars = Vec::new();
    while let Some(ch) = get_char_pressed() {
        if (' '..='~').contains(&ch) {
            chars.push(ch);
        }
    }
    chars
}

/// Check if the backspace key was pressed this frame.
pub fn backspace_pressed() -> bool {
    is_key_pressed(KeyCode::Backspace)
}

/// Check if the Enter key was pressed this frame.
pub fn enter_pressed() -> bool {
    is_key_pressed(KeyCode::Enter)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}
