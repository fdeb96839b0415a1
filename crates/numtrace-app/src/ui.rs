//! UI components using egui.

use egui::{Align, Align2, Context, Layout, Pos2, Vec2};
use numtrace_core::digit::Digit;
use numtrace_core::shell::{FOOTER_HEIGHT, LayoutInfo, LayoutMode, SIDE_PANEL_WIDTH};
use numtrace_widgets::{ClearButton, DigitButton, panel_frame, separator, sizing, subtitle, title};

const TITLE: &str = "Number Tracing Practice";
const SUBTITLE: &str = "Pick a number and trace over it!";
const CLEAR_LABEL: &str = "Clear";

/// Top of the horizontal digit row in the stacked layout.
const DIGIT_ROW_TOP: f32 = 100.0;
const MARGIN: f32 = 20.0;

/// Actions that can be triggered by UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SelectDigit(Digit),
    Clear,
}

/// UI state that persists across frames.
#[derive(Debug, Clone)]
pub struct UiState {
    pub selected: Digit,
    pub layout: LayoutInfo,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected: Digit::default(),
            layout: LayoutInfo::compute(Default::default()),
        }
    }
}

/// Render the UI and return any action triggered this frame.
pub fn render_ui(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    match ui_state.layout.mode {
        LayoutMode::SideBySide => render_side_panel(ctx, ui_state),
        LayoutMode::Stacked => {
            render_header(ctx);
            let digit_action = render_digit_row(ctx, ui_state);
            let clear_action = render_footer(ctx, ui_state);
            digit_action.or(clear_action)
        }
    }
}

/// One button per digit; returns the clicked digit.
fn digit_buttons(ui: &mut egui::Ui, selected: Digit) -> Option<Digit> {
    let mut clicked = None;
    for digit in Digit::ALL {
        if DigitButton::new(digit.as_char(), digit == selected).show(ui) {
            clicked = Some(digit);
        }
    }
    clicked
}

fn render_header(ctx: &Context) {
    egui::Area::new(egui::Id::new("header"))
        .anchor(Align2::CENTER_TOP, Vec2::new(0.0, MARGIN))
        .interactable(false)
        .show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                title(ui, TITLE, 28.0);
                subtitle(ui, SUBTITLE);
            });
        });
}

fn render_digit_row(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;
    let width = ui_state.layout.viewport.width as f32;

    egui::Area::new(egui::Id::new("digit_row"))
        .fixed_pos(Pos2::new(0.0, DIGIT_ROW_TOP))
        .show(ctx, |ui| {
            egui::ScrollArea::horizontal()
                .max_width(width)
                .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing = Vec2::new(sizing::DIGIT_SPACING, 0.0);
                        ui.add_space(MARGIN);
                        if let Some(digit) = digit_buttons(ui, ui_state.selected) {
                            action = Some(UiAction::SelectDigit(digit));
                        }
                        ui.add_space(MARGIN);
                    });
                });
        });

    action
}

fn render_footer(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;
    let viewport = ui_state.layout.viewport;
    let width = (viewport.width as f32 - 2.0 * MARGIN).max(0.0);
    let top = (viewport.height - FOOTER_HEIGHT) as f32 + MARGIN;

    egui::Area::new(egui::Id::new("footer"))
        .fixed_pos(Pos2::new(MARGIN, top.max(0.0)))
        .show(ctx, |ui| {
            if ClearButton::new(CLEAR_LABEL).width(width).show(ui) {
                action = Some(UiAction::Clear);
            }
        });

    action
}

/// Tablet landscape: title, vertical digit list and clear button on the left.
fn render_side_panel(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;
    let margin = 12.0;
    let inner_width = SIDE_PANEL_WIDTH as f32 - 2.0 * margin - 24.0;
    // Room left for the digit list after title, clear button and padding
    let list_height = (ui_state.layout.viewport.height as f32 - 200.0).max(sizing::DIGIT_BUTTON);

    egui::Area::new(egui::Id::new("side_panel"))
        .fixed_pos(Pos2::new(margin, margin))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(inner_width);
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    title(ui, TITLE, 24.0);
                    separator(ui);

                    egui::ScrollArea::vertical()
                        .max_height(list_height)
                        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing = Vec2::new(0.0, sizing::DIGIT_SPACING);
                            if let Some(digit) = digit_buttons(ui, ui_state.selected) {
                                action = Some(UiAction::SelectDigit(digit));
                            }
                        });

                    ui.add_space(MARGIN);
                    if ClearButton::new(CLEAR_LABEL).show(ui) {
                        action = Some(UiAction::Clear);
                    }
                });
            });
        });

    action
}
