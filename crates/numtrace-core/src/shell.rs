//! Host shell state: selected digit, viewport and layout.

use crate::canvas::ClearCanvas;
use crate::digit::Digit;
use crate::haptics::{self, Haptics, NoHaptics};
use kurbo::{Point, Rect, Size};

/// Viewports wider than this are laid out as tablets.
pub const TABLET_WIDTH_THRESHOLD: f64 = 768.0;

/// Width of the selector panel in the side-by-side layout.
pub const SIDE_PANEL_WIDTH: f64 = 200.0;

/// Height reserved above the canvas for the title and selector in the stacked layout.
pub const HEADER_HEIGHT: f64 = 190.0;

/// Height reserved below the canvas for the clear button in the stacked layout.
pub const FOOTER_HEIGHT: f64 = 100.0;

/// Stroke width on tablets.
pub const TABLET_STROKE_WIDTH: f64 = 10.0;

/// Stroke width on phones.
pub const PHONE_STROKE_WIDTH: f64 = 8.0;

/// Logical viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn is_tablet(&self) -> bool {
        self.width > TABLET_WIDTH_THRESHOLD
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// Arrangement of selector and canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Selector panel on the left, canvas on the right (tablet landscape).
    SideBySide,
    /// Header and selector above the canvas, clear button below.
    Stacked,
}

/// Layout derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInfo {
    pub viewport: Viewport,
    pub is_tablet: bool,
    pub is_landscape: bool,
    pub mode: LayoutMode,
    /// Side of the square canvas.
    pub canvas_side: f64,
    pub stroke_width: f64,
}

impl LayoutInfo {
    /// Classify the viewport and size the canvas.
    pub fn compute(viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;
        let is_tablet = viewport.is_tablet();
        let is_landscape = viewport.is_landscape();

        let canvas_side = if is_tablet {
            if is_landscape {
                (height * 0.7).min(600.0)
            } else {
                (width * 0.7).min(500.0)
            }
        } else {
            (width * 0.85).min(height * 0.5)
        };

        let mode = if is_tablet && is_landscape {
            LayoutMode::SideBySide
        } else {
            LayoutMode::Stacked
        };

        // Stacked canvas must fit between header and footer
        let canvas_side = match mode {
            LayoutMode::SideBySide => canvas_side,
            LayoutMode::Stacked => canvas_side.min(height - HEADER_HEIGHT - FOOTER_HEIGHT),
        };

        Self {
            viewport,
            is_tablet,
            is_landscape,
            mode,
            canvas_side: canvas_side.max(0.0),
            stroke_width: if is_tablet { TABLET_STROKE_WIDTH } else { PHONE_STROKE_WIDTH },
        }
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_side, self.canvas_side)
    }

    /// Where the canvas sits in the viewport.
    pub fn canvas_frame(&self) -> Rect {
        let side = self.canvas_side;
        let Viewport { width, height } = self.viewport;

        let origin = match self.mode {
            LayoutMode::SideBySide => {
                let area = (width - SIDE_PANEL_WIDTH).max(0.0);
                Point::new(
                    SIDE_PANEL_WIDTH + ((area - side) / 2.0).max(0.0),
                    ((height - side) / 2.0).max(0.0),
                )
            }
            LayoutMode::Stacked => {
                let area = (height - HEADER_HEIGHT - FOOTER_HEIGHT).max(0.0);
                Point::new(
                    ((width - side) / 2.0).max(0.0),
                    HEADER_HEIGHT + ((area - side) / 2.0).max(0.0),
                )
            }
        };

        Rect::from_origin_size(origin, self.canvas_size())
    }
}

/// Top-level application state around the drawing canvas.
pub struct HostShell {
    selected: Digit,
    viewport: Viewport,
    haptics: Box<dyn Haptics>,
}

impl Default for HostShell {
    fn default() -> Self {
        Self::new(Box::new(NoHaptics))
    }
}

impl HostShell {
    /// Create a shell with a haptics backend.
    pub fn new(haptics: Box<dyn Haptics>) -> Self {
        Self {
            selected: Digit::default(),
            viewport: Viewport::default(),
            haptics,
        }
    }

    /// The ten selectable digits.
    pub fn digits(&self) -> [Digit; 10] {
        Digit::ALL
    }

    pub fn selected(&self) -> Digit {
        self.selected
    }

    /// Switch digits. The canvas is always cleared, even when the digit is unchanged.
    pub fn select_digit(&mut self, digit: Digit, canvas: &mut dyn ClearCanvas) {
        haptics::pulse(self.haptics.as_ref());
        if digit != self.selected {
            log::info!("Selected digit {}", digit);
        }
        self.selected = digit;
        canvas.clear_canvas();
    }

    /// Clear button.
    pub fn clear(&mut self, canvas: &mut dyn ClearCanvas) {
        haptics::pulse(self.haptics.as_ref());
        canvas.clear_canvas();
    }

    /// Record new viewport dimensions. Returns true if they changed.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }

    /// Layout for the current viewport.
    pub fn layout(&self) -> LayoutInfo {
        LayoutInfo::compute(self.viewport)
    }
}
