//! Renderer trait abstraction.

use kurbo::{BezPath, Point, Rect};
use numtrace_core::canvas::DrawingCanvas;
use numtrace_core::digit::Digit;
use numtrace_core::template::TemplateOverlay;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Corner radius of the drawing surface card.
pub const SURFACE_CORNER_RADIUS: f64 = 10.0;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a DrawingCanvas,
    /// Digit shown by the guide glyph.
    pub digit: Digit,
    /// Where the canvas sits in the window, in logical pixels.
    pub frame: Rect,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Window background color.
    pub background_color: Color,
    /// Fill of the drawing surface.
    pub surface_color: Color,
    /// Outline of the drawing surface.
    pub border_color: Color,
    /// Guide glyph settings.
    pub template: TemplateOverlay,
    /// Whether to draw the guide glyph.
    pub show_template: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the canvas at the window origin.
    pub fn new(canvas: &'a DrawingCanvas, digit: Digit) -> Self {
        Self {
            canvas,
            digit,
            frame: Rect::from_origin_size(Point::ZERO, canvas.size()),
            scale_factor: 1.0,
            background_color: Color::from_rgba8(245, 245, 245, 255),
            surface_color: Color::from_rgba8(250, 250, 250, 255),
            border_color: Color::from_rgba8(224, 224, 224, 255),
            template: TemplateOverlay::default(),
            show_template: true,
        }
    }

    /// Set the on-screen frame of the canvas.
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the drawing surface color.
    pub fn with_surface(mut self, color: Color) -> Self {
        self.surface_color = color;
        self
    }

    /// Set the guide glyph settings.
    pub fn with_template(mut self, template: TemplateOverlay) -> Self {
        self.template = template;
        self
    }

    /// Hide or show the guide glyph.
    pub fn with_template_visible(mut self, visible: bool) -> Self {
        self.show_template = visible;
        self
    }

    /// Canvas bounds in surface-local coordinates.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.frame.size())
    }
}

/// One stroked path to draw, in surface-local coordinates.
#[derive(Debug, Clone)]
pub struct PathLayer {
    pub path: BezPath,
    pub color: Color,
    pub width: f64,
    /// True for the stroke still being drawn.
    pub active: bool,
}

/// Drawable layers for the canvas, bottom to top.
///
/// Committed strokes come first in insertion order, each with its own color,
/// followed by the active stroke when it has any points.
pub fn stroke_layers(canvas: &DrawingCanvas) -> Vec<PathLayer> {
    let style = canvas.path_style();
    let width = canvas.stroke_width();
    let store = canvas.store();

    let mut layers: Vec<PathLayer> = store
        .strokes()
        .iter()
        .map(|stroke| PathLayer {
            path: stroke.to_path(style),
            color: stroke.color(),
            width,
            active: false,
        })
        .collect();

    if store.is_drawing() {
        layers.push(PathLayer {
            path: numtrace_core::path::build_path(store.active_stroke(), style),
            color: canvas.stroke_color(),
            width,
            active: true,
        });
    }

    layers
}

/// The guide glyph as a layer, in surface-local coordinates.
pub fn template_layer(ctx: &RenderContext) -> PathLayer {
    let bounds = ctx.local_bounds();
    PathLayer {
        path: ctx.template.glyph_path(ctx.digit, bounds),
        color: ctx.template.color,
        width: ctx.template.stroke_width(bounds),
        active: false,
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, SVG output, or other rendering engines.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called whenever drawing state changes; output is a pure function of the context.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
