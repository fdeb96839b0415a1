//! SVG document renderer.
//!
//! Produces the same picture as the Vello backend as a standalone SVG, in
//! surface-local coordinates. Useful for snapshots and headless checks.

use crate::renderer::{PathLayer, RenderContext, Renderer, SURFACE_CORNER_RADIUS, stroke_layers, template_layer};
use numtrace_core::color::{opacity, to_hex};

/// Builds an SVG document per frame.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last built document.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Take the last built document, leaving an empty string behind.
    pub fn take_document(&mut self) -> String {
        std::mem::take(&mut self.document)
    }

    fn write_layer(&mut self, layer: &PathLayer) {
        let data = layer.path.to_svg();
        if data.is_empty() {
            return;
        }
        self.document.push_str(&format!(
            r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round""#,
            data,
            to_hex(layer.color),
            layer.width,
        ));
        let alpha = opacity(layer.color);
        if alpha < 1.0 {
            self.document.push_str(&format!(r#" stroke-opacity="{:.3}""#, alpha));
        }
        self.document.push_str("/>\n");
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.document.clear();
        let bounds = ctx.local_bounds();
        let (width, height) = (bounds.width(), bounds.height());

        self.document.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = width,
            h = height,
        ));
        self.document.push_str(&format!(
            "<rect width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>\n",
            width,
            height,
            SURFACE_CORNER_RADIUS,
            to_hex(ctx.surface_color),
        ));

        if ctx.show_template {
            let template = template_layer(ctx);
            self.document.push_str("<g class=\"template\">\n");
            self.write_layer(&template);
            self.document.push_str("</g>\n");
        }

        self.document.push_str("<g class=\"strokes\">\n");
        for layer in stroke_layers(ctx.canvas) {
            self.write_layer(&layer);
        }
        self.document.push_str("</g>\n</svg>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use numtrace_core::canvas::{CanvasConfig, DrawingCanvas};
    use numtrace_core::digit::Digit;
    use numtrace_core::input::PointerEvent;

    fn canvas() -> DrawingCanvas {
        DrawingCanvas::new(CanvasConfig {
            width: 300.0,
            height: 300.0,
            stroke_width: 10.0,
            stroke_color: "#2196F3".to_string(),
        })
        .unwrap()
    }

    fn render(canvas: &DrawingCanvas, show_template: bool) -> String {
        let mut renderer = SvgRenderer::new();
        let ctx = RenderContext::new(canvas, Digit::new(3).unwrap()).with_template_visible(show_template);
        renderer.build_scene(&ctx);
        renderer.take_document()
    }

    #[test]
    fn test_empty_canvas_only_has_template() {
        let svg = render(&canvas(), true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="300""#));
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains(r##"stroke="#e0e0e0""##));
    }

    #[test]
    fn test_one_path_per_stroke() {
        let mut canvas = canvas();
        for x in [10.0, 50.0] {
            canvas.handle_pointer_event(PointerEvent::Down { position: Point::new(x, 10.0) });
            canvas.handle_pointer_event(PointerEvent::Move { position: Point::new(x, 90.0) });
            canvas.handle_pointer_event(PointerEvent::Up { position: Point::new(x, 90.0) });
        }
        canvas.handle_pointer_event(PointerEvent::Down { position: Point::new(200.0, 200.0) });

        let svg = render(&canvas, false);
        assert_eq!(svg.matches("<path").count(), 3);
        assert_eq!(svg.matches(r##"stroke="#2196f3""##).count(), 3);
        assert_eq!(svg.matches(r#"stroke-width="10""#).count(), 3);
        assert!(svg.contains(r#"stroke-linecap="round""#));
    }

    #[test]
    fn test_tap_renders_dot_glyph() {
        let mut canvas = canvas();
        canvas.handle_pointer_event(PointerEvent::Down { position: Point::new(10.0, 10.0) });
        canvas.handle_pointer_event(PointerEvent::Up { position: Point::new(10.0, 10.0) });

        let svg = render(&canvas, false);
        assert_eq!(svg.matches("<path").count(), 1);
        // A closed curve around the tap point
        assert!(svg.contains('Z'));
    }

    #[test]
    fn test_document_header_and_footer() {
        let mut canvas = DrawingCanvas::new(CanvasConfig {
            width: 200.0,
            height: 120.0,
            stroke_width: 8.0,
            stroke_color: "#2196F3".to_string(),
        })
        .unwrap();
        canvas.handle_pointer_event(PointerEvent::Down { position: Point::new(10.0, 10.0) });
        canvas.handle_pointer_event(PointerEvent::Move { position: Point::new(60.0, 40.0) });
        canvas.handle_pointer_event(PointerEvent::Up { position: Point::new(60.0, 40.0) });

        let svg = render(&canvas, false);
        let mut lines = svg.lines();
        assert_eq!(
            lines.next(),
            Some(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="120" viewBox="0 0 200 120">"#)
        );
        assert!(lines.next().is_some_and(|line| line.starts_with(r#"<rect width="200" height="120" rx="#)));
        assert!(!svg.contains("stroke-opacity"));
        assert!(svg.ends_with("</g>\n</svg>\n"));
    }

    #[test]
    fn test_clear_removes_paths() {
        let mut canvas = canvas();
        canvas.handle_pointer_event(PointerEvent::Down { position: Point::new(10.0, 10.0) });
        canvas.handle_pointer_event(PointerEvent::Up { position: Point::new(10.0, 10.0) });
        canvas.clear();

        let svg = render(&canvas, false);
        assert_eq!(svg.matches("<path").count(), 0);
    }
}
