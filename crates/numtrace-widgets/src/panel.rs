//! Panel frame for the selector.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

/// Rounded, softly shadowed frame that holds the digit selector.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 1,
            blur: 12,
            offset: [0, 3],
            color: Color32::from_black_alpha(20),
        })
        .inner_margin(Margin::symmetric(12, 16))
}
