//! A committed stroke: the points of one finger-down to finger-up motion.

use crate::path::{PathStyle, build_path};
use kurbo::{BezPath, Point, Rect};
use peniko::Color;

/// A sealed stroke with its color.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
}

impl Stroke {
    /// Create a stroke from sampled points.
    pub fn from_points(points: Vec<Point>, color: Color) -> Self {
        Self { points, color }
    }

    /// Sampled points, in arrival order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds of the sampled points.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |rect, p| rect.union_pt(*p))
    }

    /// Drawable path for this stroke.
    pub fn to_path(&self, style: PathStyle) -> BezPath {
        build_path(&self.points, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let stroke = Stroke::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
            ],
            Color::BLACK,
        );

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_bounds() {
        let stroke = Stroke::from_points(Vec::new(), Color::BLACK);
        assert!(stroke.is_empty());
        assert_eq!(stroke.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_dot() {
        let stroke = Stroke::from_points(vec![Point::new(3.0, 4.0)], Color::BLACK);
        assert_eq!(stroke.len(), 1);
        assert!(!stroke.to_path(PathStyle::Polyline).elements().is_empty());
    }
}
