use egui::{Color32, RichText};

use super::SlotCalendarApp;

pub(super) const STATUS_BAR_HEIGHT: f32 = 32.0;

impl SlotCalendarApp {
    /// One line under the grid describing the live or most recent selection
    pub(super) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.add_space(12.0);

        let text = if self.controller.is_dragging() {
            format!("Selecting {}", self.controller.label())
        } else if let Some(done) = &self.last_selection {
            format!("Last selection: {}", done.label)
        } else {
            "Drag across the grid to pick a time".to_string()
        };

        ui.label(
            RichText::new(text)
                .size(12.0)
                .color(if self.active_theme.is_dark {
                    Color32::from_gray(170)
                } else {
                    Color32::from_gray(100)
                }),
        );
    }
}
