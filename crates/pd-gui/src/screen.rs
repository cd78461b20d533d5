//! The reward screen: paycheque entry, the roll action, and results.

use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use macroquad::prelude::*;

use pd_mechanics::{
    DEFAULT_BASE_AMOUNT, DEFAULT_WIN_THRESHOLD, DicePool, Money, RewardOutcome, RollSet,
    evaluate_reward,
};

use crate::input;
use crate::theme::{TEXT_LARGE, TEXT_SIZE, TEXT_SMALL, WINDOW_H, WINDOW_W, palette};
use crate::widget::button::draw_button;
use crate::widget::input::draw_input;
use crate::widget::panel::draw_panel_titled;
use crate::widget::{Rect2, draw_label, draw_label_centered};

/// Longest amount the field accepts, in characters.
const AMOUNT_MAX_LEN: usize = 12;

/// Presentation state for the reward screen.
///
/// Owns the RNG and the editable paycheque text; the core pipeline is
/// called synchronously from [`update`](Self::update) when the player
/// rolls.
pub struct RewardScreen {
    amount_text: String,
    amount_active: bool,
    pool: DicePool,
    rolls: Option<RollSet>,
    outcome: Option<RewardOutcome>,
    error: Option<String>,
    rng: StdRng,
}

impl Default for RewardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardScreen {
    /// Create the screen with the default paycheque pre-filled.
    pub fn new() -> Self {
        Self {
            amount_text: default_amount_text(),
            amount_active: false,
            pool: DicePool::default(),
            rolls: None,
            outcome: None,
            error: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Parse the paycheque field and run the roll-and-evaluate pipeline.
    ///
    /// An unparsable amount opens the error dialog instead of rolling;
    /// the core never sees the invalid text.
    fn roll(&mut self) {
        match self.amount_text.parse::<Money>() {
            Ok(base) => {
                let rolls = self.pool.roll(&mut self.rng);
                self.outcome = Some(evaluate_reward(&rolls, DEFAULT_WIN_THRESHOLD, base));
                self.rolls = Some(rolls);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Handle one frame of input.
    ///
    /// While the error dialog is open it captures all input; dismissing
    /// it resets the paycheque field to the default.
    pub fn update(&mut self) {
        let (mx, my) = mouse_position();

        if self.error.is_some() {
            let clicked_ok = is_mouse_button_pressed(MouseButton::Left)
                && modal_ok_rect().contains(mx, my);
            if clicked_ok || input::enter_pressed() || input::escape_pressed() {
                self.error = None;
                self.amount_text = default_amount_text();
                self.amount_active = false;
            }
            return;
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            self.amount_active = amount_field_rect().contains(mx, my);
            if roll_button_rect().contains(mx, my) {
                self.roll();
                return;
            }
        }

        if self.amount_active {
            for ch in input::typed_chars() {
                if self.amount_text.len() < AMOUNT_MAX_LEN {
                    self.amount_text.push(ch);
                }
            }
            if input::backspace_pressed() {
                self.amount_text.pop();
            }
        }

        if input::enter_pressed() {
            self.roll();
        }
    }

    /// Draw the whole screen, including the error dialog when open.
    pub fn draw(&self) {
        let (mx, my) = mouse_position();

        let panel = Rect2::new(20.0, 20.0, WINDOW_W - 40.0, WINDOW_H - 40.0);
        draw_panel_titled(&panel, "Random Reward Dice Roller");

        // Paycheque entry row
        draw_label(
            "Biweekly paycheque: $",
            40.0,
            78.0,
            TEXT_SIZE,
            palette::WHITE,
        );
        draw_input(
            &self.amount_text,
            &default_amount_text(),
            self.amount_active,
            &amount_field_rect(),
        );

        draw_label_centered(
            &format!(
                "Roll {} {}-sided dice. Win if every die is at least {}.",
                self.pool.num_dice(),
                self.pool.sides(),
                DEFAULT_WIN_THRESHOLD
            ),
            WINDOW_W / 2.0,
            116.0,
            TEXT_SMALL,
            palette::LIGHT_GRAY,
        );

        draw_button("ROLL", &roll_button_rect(), mx, my);

        self.draw_results();

        if let Some(message) = &self.error {
            self.draw_error_modal(message, mx, my);
        }
    }

    /// Draw the die faces, verdict, and payout lines.
    fn draw_results(&self) {
        // Die faces
        let dice_count = self.pool.num_dice() as usize;
        let face = 64.0;
        let gap = 26.0;
        let row_w = dice_count as f32 * face + (dice_count as f32 - 1.0) * gap;
        let mut x = (WINDOW_W - row_w) / 2.0;
        for i in 0..dice_count {
            let value = self
                .rolls
                .as_ref()
                .and_then(|r| r.values().get(i))
                .map(|v| v.to_string());

            crate::widget::bordered_rect(x, 210.0, face, face, palette::BLACK, palette::WHITE);
            draw_label_centered(
                &format!("Die {}", i + 1),
                x + face / 2.0,
                188.0,
                TEXT_SMALL,
                palette::LIGHT_GRAY,
            );
            draw_label_centered(
                value.as_deref().unwrap_or("--"),
                x + face / 2.0,
                210.0 + (face - TEXT_LARGE * 0.75) / 2.0,
                TEXT_LARGE,
                palette::YELLOW,
            );
            x += face + gap;
        }

        // Verdict and payout
        let (status, status_color) = match &self.outcome {
            None => (
                "Roll the dice to see if you win!".to_string(),
                palette::LIGHT_GRAY,
            ),
            Some(RewardOutcome::Lost) => (
                format!("You lost. Not every die reached {DEFAULT_WIN_THRESHOLD}."),
                palette::RED,
            ),
            Some(RewardOutcome::Won { .. }) => ("You WON!".to_string(), palette::GREEN),
        };
        draw_label_centered(&status, WINDOW_W / 2.0, 300.0, TEXT_SIZE, status_color);

        let (sum_line, mult_line, reward_line) = match &self.outcome {
            Some(RewardOutcome::Won {
                sum,
                multiplier,
                reward,
            }) => (
                format!("Sum: {sum}"),
                format!("Multiplier: {multiplier}"),
                format!("Reward: {reward}"),
            ),
            _ => (
                "Sum: --".to_string(),
                "Multiplier: --".to_string(),
                "Reward: --".to_string(),
            ),
        };
        draw_label_centered(&sum_line, WINDOW_W / 2.0, 336.0, TEXT_SMALL, palette::WHITE);
        draw_label_centered(&mult_line, WINDOW_W / 2.0, 358.0, TEXT_SMALL, palette::WHITE);
        draw_label_centered(
            &reward_line,
            WINDOW_W / 2.0,
            386.0,
            TEXT_LARGE,
            palette::GREEN,
        );
    }

    /// Draw the blocking invalid-input dialog over a dimmed screen.
    fn draw_error_modal(&self, message: &str, mx: f32, my: f32) {
        draw_rectangle(0.0, 0.0, WINDOW_W, WINDOW_H, palette::OVERLAY);

        let dialog = Rect2::new(90.0, 160.0, WINDOW_W - 180.0, 150.0);
        draw_panel_titled(&dialog, "Invalid Input");

        draw_label_centered(
            "Please enter a valid paycheque amount.",
            dialog.center_x(),
            dialog.y + 44.0,
            TEXT_SMALL,
            palette::WHITE,
        );
        draw_label_centered(
            message,
            dialog.center_x(),
            dialog.y + 68.0,
            TEXT_SMALL,
            palette::RED,
        );

        draw_button("OK", &modal_ok_rect(), mx, my);
    }
}

/// Paycheque field text for the default amount, without the `$` sign.
fn default_amount_text() -> String {
    DEFAULT_BASE_AMOUNT
        .to_string()
        .trim_start_matches('$')
        .to_string()
}

fn amount_field_rect() -> Rect2 {
    Rect2::new(300.0, 72.0, 160.0, 32.0)
}

fn roll_button_rect() -> Rect2 {
    Rect2::new(WINDOW_W / 2.0 - 60.0, 142.0, 120.0, 36.0)
}

fn modal_ok_rect() -> Rect2 {
    Rect2::new(WINDOW_W / 2.0 - 40.0, 265.0, 80.0, 30.0)
}
