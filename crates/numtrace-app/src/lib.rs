//! NumTrace Application
//!
//! The application shell providing windowing, pointer routing, haptics
//! and the selector UI around the drawing canvas.

mod app;
mod haptics;
mod pointer;
mod ui;

pub use app::{App, AppConfig, CONFIG_ENV_VAR};
pub use haptics::PlatformHaptics;
pub use pointer::PointerRouter;
pub use ui::{UiAction, UiState, render_ui};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
