//! In-memory stroke storage: committed strokes plus the stroke being drawn.

use crate::stroke::Stroke;
use kurbo::Point;
use peniko::Color;

/// Ordered committed strokes and the active stroke.
///
/// The active stroke is non-empty only while a pointer is down. Committing
/// moves it into the committed list and leaves it empty in the same call.
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    active: Vec<Point>,
}

impl StrokeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new active stroke at `point`.
    ///
    /// Any unfinished active stroke is discarded.
    pub fn begin_stroke(&mut self, point: Point) {
        if !self.active.is_empty() {
            log::warn!(
                "Starting a stroke while another is active, dropping {} points",
                self.active.len()
            );
        }
        self.active.clear();
        self.active.push(point);
    }

    /// Append a point to the active stroke. Ignored when no stroke is active.
    pub fn extend_active_stroke(&mut self, point: Point) -> bool {
        if self.active.is_empty() {
            return false;
        }
        self.active.push(point);
        true
    }

    /// Seal the active stroke with `color`.
    ///
    /// Returns false (and does nothing) if there is no active stroke.
    pub fn commit_active_stroke(&mut self, color: Color) -> bool {
        if self.active.is_empty() {
            return false;
        }
        let points = std::mem::take(&mut self.active);
        log::debug!("Committed stroke #{} with {} points", self.strokes.len(), points.len());
        self.strokes.push(Stroke::from_points(points, color));
        true
    }

    /// Remove every committed stroke and the active stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active.clear();
    }

    /// Committed strokes in insertion order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Points of the stroke being drawn (empty when idle).
    pub fn active_stroke(&self) -> &[Point] {
        &self.active
    }

    /// Whether a stroke is being drawn.
    pub fn is_drawing(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when there is nothing to draw at all.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.active.is_empty()
    }
}
