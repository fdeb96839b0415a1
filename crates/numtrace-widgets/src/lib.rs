//! Styled egui components for the tracing pad.
//!
//! - **Buttons**: round digit buttons, the clear button
//! - **Panel**: the selector frame
//! - **Layout**: titles, subtitles, separators

pub mod buttons;
pub mod layout;
pub mod panel;

pub use buttons::{ClearButton, DigitButton};
pub use layout::{separator, subtitle, title};
pub use panel::panel_frame;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Diameter of a digit button
    pub const DIGIT_BUTTON: f32 = 60.0;
    /// Gap between digit buttons
    pub const DIGIT_SPACING: f32 = 16.0;
    /// Clear button height
    pub const CLEAR_HEIGHT: f32 = 50.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 10;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 12;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(51, 51, 51);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(102, 102, 102);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(224, 224, 224);
    /// Selected digit (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(33, 150, 243);
    /// Clear button (red)
    pub const DANGER: Color32 = Color32::from_rgb(255, 82, 82);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(240, 246, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
