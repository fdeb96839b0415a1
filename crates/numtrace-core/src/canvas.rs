//! The drawing canvas: configuration, pointer state machine and stroke store.

use crate::color::{ColorError, parse_hex_color};
use crate::input::{PointSampler, PointerEvent, PointerState};
use crate::path::PathStyle;
use crate::store::StrokeStore;
use kurbo::{Point, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canvas construction errors.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f64),
    #[error("invalid stroke color: {0}")]
    Color(#[from] ColorError),
    #[error("invalid canvas config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options supplied once when a canvas is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Surface width in logical pixels.
    pub width: f64,
    /// Surface height in logical pixels.
    pub height: f64,
    /// Stroke width in logical pixels.
    pub stroke_width: f64,
    /// Stroke color as a hex string.
    pub stroke_color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 400.0,
            stroke_width: 3.0,
            stroke_color: "#000000".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<Color, CanvasError> {
        if !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0) {
            return Err(CanvasError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(CanvasError::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(parse_hex_color(&self.stroke_color)?)
    }
}

/// Capability to wipe a drawing surface.
///
/// This is the one command the drawing core exposes to its host.
pub trait ClearCanvas {
    /// Remove every stroke, including one in progress.
    fn clear_canvas(&mut self);
}

/// A drawing surface that turns pointer events into strokes.
#[derive(Debug, Clone)]
pub struct DrawingCanvas {
    config: CanvasConfig,
    stroke_color: Color,
    path_style: PathStyle,
    sampler: PointSampler,
    pointer: PointerState,
    store: StrokeStore,
}

impl DrawingCanvas {
    /// Create a canvas from validated configuration.
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        let stroke_color = config.validate()?;
        let size = Size::new(config.width, config.height);
        Ok(Self {
            config,
            stroke_color,
            path_style: PathStyle::default(),
            sampler: PointSampler::at_origin(size),
            pointer: PointerState::Idle,
            store: StrokeStore::new(),
        })
    }

    /// Set how stroke points are joined.
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    pub fn stroke_width(&self) -> f64 {
        self.config.stroke_width
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn path_style(&self) -> PathStyle {
        self.path_style
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    /// Place the surface in the window. Strokes keep their local coordinates.
    pub fn set_frame(&mut self, origin: Point, size: Size) {
        self.sampler = PointSampler::new(origin, size);
        self.config.width = size.width;
        self.config.height = size.height;
    }

    /// Apply a new surface size and stroke width computed by the host layout.
    pub fn resize(&mut self, size: Size, stroke_width: f64) {
        self.set_frame(self.sampler.origin, size);
        if stroke_width.is_finite() && stroke_width > 0.0 {
            self.config.stroke_width = stroke_width;
        }
    }

    /// Feed one pointer event through the stroke state machine.
    ///
    /// Returns true if the drawing state changed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match (self.pointer, event) {
            (PointerState::Idle, PointerEvent::Down { position }) => {
                if !self.sampler.contains(position) {
                    return false;
                }
                self.store.begin_stroke(self.sampler.to_local(position));
                self.pointer = PointerState::StrokeActive;
                true
            }
            (PointerState::StrokeActive, PointerEvent::Down { position }) => {
                // A second contact restarts the stroke; multi-touch is not arbitrated.
                self.store.begin_stroke(self.sampler.to_local(position));
                true
            }
            (PointerState::StrokeActive, PointerEvent::Move { position }) => {
                self.store.extend_active_stroke(self.sampler.to_local(position))
            }
            (PointerState::StrokeActive, PointerEvent::Up { .. } | PointerEvent::Cancel) => {
                self.pointer = PointerState::Idle;
                self.store.commit_active_stroke(self.stroke_color)
            }
            (PointerState::Idle, _) => false,
        }
    }

    /// Remove all strokes and return to idle.
    ///
    /// Returns true if there was anything to remove.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.store.is_empty();
        self.store.clear();
        self.pointer = PointerState::Idle;
        if had_content {
            log::debug!("Canvas cleared");
        }
        had_content
    }
}

impl ClearCanvas for DrawingCanvas {
    fn clear_canvas(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> DrawingCanvas {
        DrawingCanvas::new(CanvasConfig {
            width: 300.0,
            height: 300.0,
            stroke_width: 10.0,
            stroke_color: "#2196F3".to_string(),
        })
        .unwrap()
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down { position: Point::new(x, y) }
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move { position: Point::new(x, y) }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up { position: Point::new(x, y) }
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config = CanvasConfig::from_json(r#"{ "strokeWidth": 8 }"#).unwrap();
        assert_eq!(config.stroke_width, 8.0);
        assert_eq!(config.width, 300.0);
        assert_eq!(config.stroke_color, "#000000");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = CanvasConfig::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("strokeColor"));
        assert_eq!(CanvasConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_config() {
        let bad_size = CanvasConfig { width: 0.0, ..Default::default() };
        assert!(matches!(DrawingCanvas::new(bad_size), Err(CanvasError::InvalidDimensions { .. })));

        let bad_width = CanvasConfig { stroke_width: -1.0, ..Default::default() };
        assert!(matches!(DrawingCanvas::new(bad_width), Err(CanvasError::InvalidStrokeWidth(_))));

        let bad_color = CanvasConfig { stroke_color: "blue".to_string(), ..Default::default() };
        assert!(matches!(DrawingCanvas::new(bad_color), Err(CanvasError::Color(_))));

        assert!(matches!(CanvasConfig::from_json("{"), Err(CanvasError::Json(_))));
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut canvas = canvas();
        assert_eq!(canvas.pointer_state(), PointerState::Idle);

        assert!(canvas.handle_pointer_event(down(10.0, 10.0)));
        assert_eq!(canvas.pointer_state(), PointerState::StrokeActive);

        assert!(canvas.handle_pointer_event(mv(20.0, 20.0)));
        assert_eq!(canvas.store().active_stroke().len(), 2);

        assert!(canvas.handle_pointer_event(up(20.0, 20.0)));
        assert_eq!(canvas.pointer_state(), PointerState::Idle);
        assert_eq!(canvas.store().len(), 1);
        assert_eq!(canvas.store().strokes()[0].len(), 2);
    }

    #[test]
    fn test_idle_moves_and_ups_are_ignored() {
        let mut canvas = canvas();
        assert!(!canvas.handle_pointer_event(mv(5.0, 5.0)));
        assert!(!canvas.handle_pointer_event(up(5.0, 5.0)));
        assert!(!canvas.handle_pointer_event(PointerEvent::Cancel));
        assert!(canvas.store().is_empty());
        assert_eq!(canvas.pointer_state(), PointerState::Idle);
    }

    #[test]
    fn test_down_outside_surface_is_ignored() {
        let mut canvas = canvas();
        canvas.set_frame(Point::new(100.0, 100.0), Size::new(300.0, 300.0));
        assert!(!canvas.handle_pointer_event(down(50.0, 50.0)));
        assert_eq!(canvas.pointer_state(), PointerState::Idle);
    }

    #[test]
    fn test_points_are_surface_local() {
        let mut canvas = canvas();
        canvas.set_frame(Point::new(200.0, 40.0), Size::new(300.0, 300.0));
        canvas.handle_pointer_event(down(210.0, 50.0));
        canvas.handle_pointer_event(mv(600.0, 50.0));
        canvas.handle_pointer_event(up(600.0, 50.0));

        let stroke = &canvas.store().strokes()[0];
        assert_eq!(stroke.points(), &[Point::new(10.0, 10.0), Point::new(400.0, 10.0)]);
    }

    #[test]
    fn test_cancel_commits_stroke() {
        let mut canvas = canvas();
        canvas.handle_pointer_event(down(1.0, 1.0));
        canvas.handle_pointer_event(mv(2.0, 2.0));
        assert!(canvas.handle_pointer_event(PointerEvent::Cancel));
        assert_eq!(canvas.store().len(), 1);
    }

    #[test]
    fn test_committed_stroke_uses_canvas_color() {
        let mut canvas = canvas();
        canvas.handle_pointer_event(down(1.0, 1.0));
        canvas.handle_pointer_event(up(1.0, 1.0));
        let rgba = canvas.store().strokes()[0].color().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0x21, 0x96, 0xf3));
    }

    #[test]
    fn test_clear_through_capability() {
        let mut canvas = canvas();
        canvas.handle_pointer_event(down(1.0, 1.0));
        canvas.handle_pointer_event(up(1.0, 1.0));
        canvas.handle_pointer_event(down(3.0, 3.0));

        let handle: &mut dyn ClearCanvas = &mut canvas;
        handle.clear_canvas();

        assert!(canvas.store().is_empty());
        assert_eq!(canvas.pointer_state(), PointerState::Idle);
    }

    #[test]
    fn test_clear_reports_removed_content() {
        let mut canvas = canvas();
        assert!(!canvas.clear());

        canvas.handle_pointer_event(down(1.0, 1.0));
        assert!(canvas.clear());
        assert!(!canvas.clear());
        assert!(canvas.store().is_empty());
    }

    #[test]
    fn test_resize_keeps_strokes() {
        let mut canvas = canvas();
        canvas.handle_pointer_event(down(1.0, 1.0));
        canvas.handle_pointer_event(up(1.0, 1.0));
        canvas.resize(Size::new(500.0, 500.0), 8.0);
        assert_eq!(canvas.size(), Size::new(500.0, 500.0));
        assert_eq!(canvas.stroke_width(), 8.0);
        assert_eq!(canvas.store().len(), 1);
    }
}
