//! Macroquad entry point for the Paydice GUI.

use macroquad::prelude::*;

use pd_gui::screen::RewardScreen;
use pd_gui::theme::{WINDOW_H, WINDOW_W, palette};

fn window_conf() -> Conf {
    Conf {
        window_title: "Paydice".to_owned(),
        window_width: WINDOW_W as i32,
        window_height: WINDOW_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut screen = RewardScreen::new();

    loop {
        clear_background(palette::DARK_BLUE);

        screen.update();
        screen.draw();

        next_frame().await;
    }
}
