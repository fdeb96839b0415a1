//! Routes window mouse and touch input into single-contact pointer events.
//!
//! Exactly one contact owns the stroke at a time: the left mouse button or
//! the first touch. Everything else is dropped until that contact ends.

use kurbo::Point;
use numtrace_core::input::PointerEvent;
use winit::event::TouchPhase;

/// Tracks which contact owns the current stroke.
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    /// Last known mouse position in logical coordinates.
    cursor: Point,
    mouse_drawing: bool,
    /// The touch that owns the current stroke.
    active_touch: Option<u64>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some contact currently owns a stroke.
    pub fn is_drawing(&self) -> bool {
        self.mouse_drawing || self.active_touch.is_some()
    }

    pub fn cursor_moved(&mut self, position: Point) -> Option<PointerEvent> {
        self.cursor = position;
        self.mouse_drawing.then_some(PointerEvent::Move { position })
    }

    /// Left button pressed. `over_ui` only filters new contacts.
    pub fn mouse_pressed(&mut self, over_ui: bool) -> Option<PointerEvent> {
        if over_ui || self.is_drawing() {
            return None;
        }
        self.mouse_drawing = true;
        Some(PointerEvent::Down { position: self.cursor })
    }

    pub fn mouse_released(&mut self) -> Option<PointerEvent> {
        if !self.mouse_drawing {
            return None;
        }
        self.mouse_drawing = false;
        Some(PointerEvent::Up { position: self.cursor })
    }

    /// The cursor left the window mid-stroke.
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        if !self.mouse_drawing {
            return None;
        }
        self.mouse_drawing = false;
        Some(PointerEvent::Cancel)
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: Point, over_ui: bool) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Started => {
                if over_ui || self.is_drawing() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(PointerEvent::Down { position })
            }
            TouchPhase::Moved if self.active_touch == Some(id) => Some(PointerEvent::Move { position }),
            TouchPhase::Ended if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerEvent::Up { position })
            }
            TouchPhase::Cancelled if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerEvent::Cancel)
            }
            _ => None,
        }
    }

    /// The window lost focus; whichever contact owned the stroke is cancelled.
    pub fn focus_lost(&mut self) -> Option<PointerEvent> {
        if !self.is_drawing() {
            return None;
        }
        self.mouse_drawing = false;
        self.active_touch = None;
        Some(PointerEvent::Cancel)
    }
}
