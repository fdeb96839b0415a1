//! Button components: round digit buttons and the clear button.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Stroke, Ui, Vec2, vec2};

use crate::{sizing, theme};

/// A round button showing one digit. Solid blue when selected.
pub struct DigitButton {
    digit: char,
    selected: bool,
}

impl DigitButton {
    /// Create a new digit button.
    pub fn new(digit: char, selected: bool) -> Self {
        Self { digit, selected }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = Vec2::splat(sizing::DIGIT_BUTTON);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = sizing::DIGIT_BUTTON / 2.0;
            let painter = ui.painter();

            // Drop shadow
            painter.circle_filled(
                rect.center() + vec2(0.0, 2.0),
                radius,
                Color32::from_black_alpha(if self.selected { 40 } else { 20 }),
            );

            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::WHITE
            };
            painter.circle_filled(rect.center(), radius, bg_color);
            if !self.selected {
                painter.circle_stroke(rect.center(), radius, Stroke::new(1.0, theme::BORDER));
            }

            let text_color = if self.selected { Color32::WHITE } else { theme::TEXT };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.digit,
                FontId::proportional(sizing::DIGIT_BUTTON * 0.4),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Full-width red button that wipes the canvas.
pub struct ClearButton<'a> {
    label: &'a str,
    width: Option<f32>,
}

impl<'a> ClearButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label, width: None }
    }

    /// Fix the width instead of filling the row.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let (rect, response) = ui.allocate_exact_size(vec2(width, sizing::CLEAR_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let corner = CornerRadius::same(sizing::CORNER_RADIUS);
            let painter = ui.painter();
            painter.rect_filled(rect.translate(vec2(0.0, 2.0)), corner, Color32::from_black_alpha(40));

            let bg_color = if response.is_pointer_button_down_on() {
                theme::DANGER.gamma_multiply(0.85)
            } else {
                theme::DANGER
            };
            painter.rect_filled(rect, corner, bg_color);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(18.0),
                Color32::WHITE,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
