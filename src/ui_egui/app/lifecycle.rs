use super::SlotCalendarApp;
use crate::models::settings::Settings;
use crate::services::selection::SelectionController;
use crate::services::settings::{FileSettingsStore, SettingsService};
use crate::ui_egui::theme::CalendarTheme;

impl SlotCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = FileSettingsStore::from_environment();
        log::info!("Reading settings from {}", store.path().display());
        let settings = SettingsService::new(store).get_or_default();

        let app = Self::with_settings(settings);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app from already-loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        log::info!(
            "Schedule {}:00-{}:00, slot height {}px, {:?}",
            settings.start_hour,
            settings.end_hour,
            settings.slot_height,
            settings.time_format
        );

        Self {
            active_theme: CalendarTheme::from_settings(&settings),
            controller: SelectionController::from_settings(&settings),
            last_selection: None,
            settings,
        }
    }

    pub(super) fn handle_exit(&mut self) {
        if self.controller.is_dragging() {
            log::debug!("Dropping selection in progress on exit");
        }
        self.controller.reset();
    }
}
