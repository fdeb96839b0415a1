//! Turns sampled stroke points into drawable curves.

use kurbo::{BezPath, Circle, Point, Shape as _};
use serde::{Deserialize, Serialize};

/// Radius of the dot drawn for a stroke with a single point (a tap).
pub const DOT_RADIUS: f64 = 1.0;

/// Flattening tolerance used when converting the dot circle to a path.
const DOT_TOLERANCE: f64 = 0.01;

/// How consecutive points are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathStyle {
    /// Cubic segments through every point (Catmull-Rom).
    #[default]
    Smooth,
    /// Straight segments between points.
    Polyline,
}

impl PathStyle {
    /// Get display name for this style.
    pub fn name(self) -> &'static str {
        match self {
            PathStyle::Smooth => "Smooth",
            PathStyle::Polyline => "Polyline",
        }
    }
}

/// Build a path through `points`.
///
/// Zero points produce an empty path and a single point produces a small
/// closed circle so that taps stay visible. Otherwise the path starts at the
/// first point and every segment ends exactly on the next sampled point.
pub fn build_path(points: &[Point], style: PathStyle) -> BezPath {
    match points {
        [] => BezPath::new(),
        [only] => dot(*only),
        _ => match style {
            PathStyle::Polyline => polyline(points),
            PathStyle::Smooth => catmull_rom(points),
        },
    }
}

/// SVG path data for `points`, or an empty string when there is nothing to draw.
pub fn path_data(points: &[Point], style: PathStyle) -> String {
    if points.is_empty() {
        return String::new();
    }
    build_path(points, style).to_svg()
}

fn dot(center: Point) -> BezPath {
    Circle::new(center, DOT_RADIUS).to_path(DOT_TOLERANCE)
}

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for point in &points[1..] {
        path.line_to(*point);
    }
    path
}

/// Uniform Catmull-Rom spline converted to cubic Beziers, with the
/// neighbours of the first and last points clamped to the endpoints.
fn catmull_rom(points: &[Point]) -> BezPath {
    let last = points.len() - 1;
    let mut path = BezPath::new();
    path.move_to(points[0]);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        path.curve_to(c1, c2, p2);
    }

    path
}
