//! NumTrace Core Library
//!
//! Platform-agnostic data structures and logic for the NumTrace digit tracing pad:
//! pointer sampling, stroke storage, path building, guide glyphs and shell layout.

pub mod canvas;
pub mod color;
pub mod digit;
pub mod haptics;
pub mod input;
pub mod path;
pub mod shell;
pub mod store;
pub mod stroke;
pub mod template;

pub use canvas::{CanvasConfig, CanvasError, ClearCanvas, DrawingCanvas};
pub use color::{ColorError, parse_hex_color};
pub use digit::{Digit, DigitError};
pub use haptics::{Haptics, HapticsError, LIGHT_IMPACT_MS, NoHaptics};
pub use input::{PointSampler, PointerEvent, PointerState};
pub use path::{DOT_RADIUS, PathStyle, build_path, path_data};
pub use shell::{HostShell, LayoutInfo, LayoutMode, Viewport};
pub use store::StrokeStore;
pub use stroke::Stroke;
pub use template::TemplateOverlay;
