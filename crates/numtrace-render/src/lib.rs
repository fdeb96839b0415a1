//! Numtrace Render Library
//!
//! Turns a drawing canvas and guide glyph into frames.
//! The default implementation uses Vello for GPU-accelerated rendering;
//! an SVG backend produces the same picture as a document.

mod renderer;
mod svg;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{
    PathLayer, RenderContext, Renderer, RendererError, SURFACE_CORNER_RADIUS, stroke_layers,
    template_layer,
};
pub use svg::SvgRenderer;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
