//! Visual theme: color palette, text sizes, and window metrics.

/// Window width in pixels (fixed-size window).
pub const WINDOW_W: f32 = 560.0;
/// Window height in pixels (fixed-size window).
pub const WINDOW_H: f32 = 460.0;

/// Text size for regular labels.
pub const TEXT_SIZE: f32 = 22.0;
/// Text size for small print.
pub const TEXT_SMALL: f32 = 18.0;
/// Text size for the reward line and die faces.
pub const TEXT_LARGE: f32 = 30.0;

/// Named colors used across the screen.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black, used for field backgrounds and the modal title bar.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Dark blue window background.
    pub const DARK_BLUE: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Dark gray for inactive borders.
    pub const DARK_GRAY: Color = Color::new(0.373, 0.341, 0.310, 1.0);
    /// Light gray for borders and secondary text.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// White for primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Red for the losing verdict and error dialog.
    pub const RED: Color = Color::new(1.0, 0.0, 0.302, 1.0);
    /// Yellow for highlights and the active field border.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
    /// Green for the winning verdict and the reward amount.
    pub const GREEN: Color = Color::new(0.0, 0.894, 0.212, 1.0);
    /// Translucent black laid over the screen behind the error dialog.
    pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.6);
}
