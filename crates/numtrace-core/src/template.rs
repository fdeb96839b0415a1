//! Faint guide glyphs drawn behind the strokes.
//!
//! Glyphs are centerline strokes in a 60x100 em box, so a child tracing the
//! middle of the guide follows the natural pen path of the digit.

use crate::digit::Digit;
use kurbo::{Affine, BezPath, Ellipse, Rect, Shape as _, Vec2};
use peniko::Color;

/// Width of the em box glyphs are defined in.
pub const EM_WIDTH: f64 = 60.0;
/// Height of the em box glyphs are defined in.
pub const EM_HEIGHT: f64 = 100.0;

/// Share of the frame height the glyph occupies.
pub const TEMPLATE_HEIGHT_RATIO: f64 = 0.6;

/// Guide thickness relative to the frame height.
const STROKE_RATIO: f64 = 0.06;

/// Tolerance for flattening the ellipses used by 0 and 8.
const ELLIPSE_TOLERANCE: f64 = 0.1;

/// Default guide color (light gray).
pub const TEMPLATE_COLOR: Color = Color::from_rgba8(0xe0, 0xe0, 0xe0, 255);

/// Presentation settings for the guide glyph.
#[derive(Debug, Clone, Copy)]
pub struct TemplateOverlay {
    pub color: Color,
    pub height_ratio: f64,
}

impl Default for TemplateOverlay {
    fn default() -> Self {
        Self {
            color: TEMPLATE_COLOR,
            height_ratio: TEMPLATE_HEIGHT_RATIO,
        }
    }
}

impl TemplateOverlay {
    /// Guide strokes for `digit`, scaled and centered in `frame`.
    pub fn glyph_path(&self, digit: Digit, frame: Rect) -> BezPath {
        let mut path = em_path(digit);
        path.apply_affine(self.em_transform(frame));
        path
    }

    /// Guide thickness for a frame.
    pub fn stroke_width(&self, frame: Rect) -> f64 {
        frame.height() * STROKE_RATIO
    }

    /// Em box to frame transform: uniform scale, centered.
    fn em_transform(&self, frame: Rect) -> Affine {
        let scale = (frame.height() * self.height_ratio / EM_HEIGHT)
            .min(frame.width() * self.height_ratio / EM_WIDTH);
        let em_center = Vec2::new(EM_WIDTH / 2.0, EM_HEIGHT / 2.0);
        Affine::translate(frame.center().to_vec2() - em_center * scale) * Affine::scale(scale)
    }
}

/// Guide strokes for `digit` in em coordinates.
pub fn em_path(digit: Digit) -> BezPath {
    let mut p = BezPath::new();
    match digit.value() {
        0 => {
            p.extend(Ellipse::new((30.0, 50.0), (26.0, 48.0), 0.0).path_elements(ELLIPSE_TOLERANCE));
        }
        1 => {
            p.move_to((14.0, 20.0));
            p.line_to((34.0, 2.0));
            p.line_to((34.0, 98.0));
        }
        2 => {
            p.move_to((4.0, 26.0));
            p.curve_to((4.0, 10.0), (16.0, 2.0), (30.0, 2.0));
            p.curve_to((46.0, 2.0), (56.0, 12.0), (56.0, 26.0));
            p.curve_to((56.0, 44.0), (38.0, 58.0), (4.0, 98.0));
            p.line_to((58.0, 98.0));
        }
        3 => {
            p.move_to((6.0, 12.0));
            p.curve_to((14.0, 5.0), (22.0, 2.0), (30.0, 2.0));
            p.curve_to((46.0, 2.0), (54.0, 12.0), (54.0, 24.0));
            p.curve_to((54.0, 38.0), (44.0, 48.0), (26.0, 48.0));
            p.curve_to((46.0, 48.0), (56.0, 60.0), (56.0, 72.0));
            p.curve_to((56.0, 90.0), (44.0, 98.0), (30.0, 98.0));
            p.curve_to((18.0, 98.0), (9.0, 94.0), (4.0, 86.0));
        }
        4 => {
            p.move_to((42.0, 98.0));
            p.line_to((42.0, 2.0));
            p.line_to((2.0, 68.0));
            p.line_to((58.0, 68.0));
        }
        5 => {
            p.move_to((54.0, 2.0));
            p.line_to((10.0, 2.0));
            p.line_to((6.0, 44.0));
            p.curve_to((14.0, 38.0), (22.0, 36.0), (30.0, 36.0));
            p.curve_to((46.0, 36.0), (56.0, 50.0), (56.0, 66.0));
            p.curve_to((56.0, 86.0), (44.0, 98.0), (28.0, 98.0));
            p.curve_to((18.0, 98.0), (9.0, 94.0), (4.0, 86.0));
        }
        6 => {
            p.move_to((50.0, 8.0));
            p.curve_to((44.0, 4.0), (38.0, 2.0), (30.0, 2.0));
            p.curve_to((12.0, 2.0), (4.0, 24.0), (4.0, 60.0));
            p.curve_to((4.0, 84.0), (16.0, 98.0), (30.0, 98.0));
            p.curve_to((46.0, 98.0), (56.0, 86.0), (56.0, 72.0));
            p.curve_to((56.0, 56.0), (44.0, 46.0), (30.0, 46.0));
            p.curve_to((16.0, 46.0), (6.0, 54.0), (4.0, 64.0));
        }
        7 => {
            p.move_to((2.0, 2.0));
            p.line_to((58.0, 2.0));
            p.line_to((22.0, 98.0));
        }
        8 => {
            p.extend(Ellipse::new((30.0, 26.0), (22.0, 24.0), 0.0).path_elements(ELLIPSE_TOLERANCE));
            p.extend(Ellipse::new((30.0, 74.0), (26.0, 24.0), 0.0).path_elements(ELLIPSE_TOLERANCE));
        }
        _ => {
            p.move_to((56.0, 36.0));
            p.curve_to((54.0, 48.0), (44.0, 54.0), (30.0, 54.0));
            p.curve_to((14.0, 54.0), (4.0, 42.0), (4.0, 28.0));
            p.curve_to((4.0, 12.0), (16.0, 2.0), (30.0, 2.0));
            p.curve_to((46.0, 2.0), (56.0, 14.0), (56.0, 36.0));
            p.curve_to((56.0, 76.0), (48.0, 98.0), (28.0, 98.0));
            p.curve_to((18.0, 98.0), (10.0, 94.0), (6.0, 88.0));
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 300.0)
    }

    #[test]
    fn test_every_digit_has_a_glyph() {
        let overlay = TemplateOverlay::default();
        for digit in Digit::ALL {
            let path = overlay.glyph_path(digit, frame());
            assert!(!path.elements().is_empty(), "digit {digit} has no guide");
        }
    }

    #[test]
    fn test_glyphs_fit_inside_frame() {
        let overlay = TemplateOverlay::default();
        let frame = Rect::new(100.0, 50.0, 400.0, 350.0);
        for digit in Digit::ALL {
            let bounds = overlay.glyph_path(digit, frame).bounding_box();
            assert!(bounds.x0 >= frame.x0 && bounds.x1 <= frame.x1, "digit {digit}");
            assert!(bounds.y0 >= frame.y0 && bounds.y1 <= frame.y1, "digit {digit}");
        }
    }

    #[test]
    fn test_glyph_height_follows_ratio() {
        let overlay = TemplateOverlay::default();
        let seven = overlay.glyph_path(Digit::new(7).unwrap(), frame()).bounding_box();
        // The 7 spans y 2..98 of the em box.
        let expected = 300.0 * TEMPLATE_HEIGHT_RATIO * 0.96;
        assert!((seven.height() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let paths: Vec<String> = Digit::ALL.iter().map(|d| em_path(*d).to_svg()).collect();
        for (i, a) in paths.iter().enumerate() {
            for b in paths.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_stroke_width_scales_with_frame() {
        let overlay = TemplateOverlay::default();
        let small = overlay.stroke_width(Rect::new(0.0, 0.0, 100.0, 100.0));
        let large = overlay.stroke_width(Rect::new(0.0, 0.0, 400.0, 400.0));
        assert!((large - 4.0 * small).abs() < 1e-9);
    }
}
