//! Layout helpers: headings and separators.

use egui::{Color32, RichText, Stroke, Ui};

use crate::theme;

/// Draw the screen title (large, bold).
pub fn title(ui: &mut Ui, text: &str, size: f32) {
    ui.label(RichText::new(text).size(size).strong().color(theme::TEXT));
}

/// Draw a subtitle line (muted).
pub fn subtitle(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(16.0).color(theme::TEXT_MUTED));
}

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [egui::Pos2::new(rect.left(), y), egui::Pos2::new(rect.right(), y)],
        Stroke::new(1.0, Color32::from_gray(230)),
    );
    ui.add_space(8.0);
}
