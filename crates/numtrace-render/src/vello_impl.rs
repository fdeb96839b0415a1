//! Vello-based renderer implementation.

use crate::renderer::{PathLayer, RenderContext, Renderer, SURFACE_CORNER_RADIUS, stroke_layers, template_layer};
use kurbo::{Affine, Cap, Join, RoundedRect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new renderer with an empty scene.
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the built scene, leaving an empty one behind.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Draw the surface card the strokes sit on.
    fn render_surface(&mut self, ctx: &RenderContext, transform: Affine) {
        let card = RoundedRect::from_rect(ctx.local_bounds(), SURFACE_CORNER_RADIUS);

        // Soft drop shadow
        let shadow = RoundedRect::from_rect(ctx.local_bounds() + kurbo::Vec2::new(0.0, 2.0), SURFACE_CORNER_RADIUS);
        self.scene.fill(
            Fill::NonZero,
            transform,
            Color::from_rgba8(0, 0, 0, 24),
            None,
            &shadow,
        );

        self.scene.fill(Fill::NonZero, transform, ctx.surface_color, None, &card);
        self.scene.stroke(&Stroke::new(1.0), transform, ctx.border_color, None, &card);
    }

    /// Stroke a layer with round caps and joins.
    fn render_layer(&mut self, layer: &PathLayer, transform: Affine) {
        let stroke = Stroke::new(layer.width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        self.scene.stroke(&stroke, transform, layer.color, None, &layer.path);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        // Clear the scene
        self.scene.reset();

        let transform = Affine::scale(ctx.scale_factor) * Affine::translate(ctx.frame.origin().to_vec2());

        self.render_surface(ctx, transform);

        if ctx.show_template {
            let template = template_layer(ctx);
            self.render_layer(&template, transform);
        }

        let layers = stroke_layers(ctx.canvas);
        for layer in &layers {
            self.render_layer(layer, transform);
        }
        log::trace!("Built scene with {} stroke layers", layers.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use numtrace_core::canvas::{CanvasConfig, DrawingCanvas};
    use numtrace_core::digit::Digit;
    use numtrace_core::input::PointerEvent;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_empty_scene() {
        let mut renderer = VelloRenderer::new();
        let canvas = DrawingCanvas::new(CanvasConfig::default()).unwrap();
        let ctx = RenderContext::new(&canvas, Digit::default());

        renderer.build_scene(&ctx);
        // Surface card and guide glyph are always drawn
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_strokes() {
        let mut renderer = VelloRenderer::new();
        let mut canvas = DrawingCanvas::new(CanvasConfig::default()).unwrap();
        canvas.handle_pointer_event(PointerEvent::Down { position: Point::new(10.0, 10.0) });
        canvas.handle_pointer_event(PointerEvent::Move { position: Point::new(40.0, 80.0) });

        let ctx = RenderContext::new(&canvas, Digit::new(2).unwrap())
            .with_frame(kurbo::Rect::new(50.0, 50.0, 350.0, 450.0))
            .with_scale_factor(2.0);
        renderer.build_scene(&ctx);

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }
}
