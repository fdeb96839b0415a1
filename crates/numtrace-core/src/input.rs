//! Pointer events and conversion to drawing-surface coordinates.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are logical window coordinates. Only one contact is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// The platform took the contact away (e.g. a system gesture).
    Cancel,
}

/// Pointer interaction state of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// No contact on the surface.
    #[default]
    Idle,
    /// A stroke is being drawn.
    StrokeActive,
}

/// Maps window positions onto the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSampler {
    /// Top-left corner of the surface in window coordinates.
    pub origin: Point,
    /// Surface size.
    pub size: Size,
}

impl PointSampler {
    /// Create a sampler for a surface at `origin`.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Sampler whose surface starts at the window origin.
    pub fn at_origin(size: Size) -> Self {
        Self::new(Point::ZERO, size)
    }

    /// Surface rect in window coordinates.
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Convert a window position to surface-local coordinates.
    pub fn to_local(&self, position: Point) -> Point {
        Point::new(position.x - self.origin.x, position.y - self.origin.y)
    }

    /// Whether `position` lies on the surface.
    pub fn contains(&self, position: Point) -> bool {
        let frame = self.frame();
        position.x >= frame.x0 && position.x <= frame.x1 && position.y >= frame.y0 && position.y <= frame.y1
    }
}

impl Default for PointSampler {
    fn default() -> Self {
        Self::at_origin(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_local() {
        let sampler = PointSampler::new(Point::new(200.0, 50.0), Size::new(300.0, 300.0));
        assert_eq!(sampler.to_local(Point::new(210.0, 60.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_contains_includes_edges() {
        let sampler = PointSampler::new(Point::new(10.0, 10.0), Size::new(100.0, 100.0));
        assert!(sampler.contains(Point::new(10.0, 10.0)));
        assert!(sampler.contains(Point::new(110.0, 110.0)));
        assert!(!sampler.contains(Point::new(9.0, 50.0)));
        assert!(!sampler.contains(Point::new(50.0, 111.0)));
    }
}
