//! Graphical front-end for Paydice.
//!
//! A macroquad application with one editable field (the paycheque),
//! one action (roll), and read-only result displays for the dice, the
//! verdict, and the payout. Invalid paycheque entry raises a blocking
//! error dialog that resets the field to the default on dismissal.

pub mod input;
pub mod screen;
pub mod theme;
pub mod widget;
