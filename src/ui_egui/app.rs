mod lifecycle;
mod status_bar;

use crate::models::selection::CompletedSelection;
use crate::models::settings::Settings;
use crate::services::selection::SelectionController;
use crate::ui_egui::drag::{DragInput, DragManager};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::event_card::{render_event_card, EventCardProps};
use crate::ui_egui::views::palette::{EventCardPalette, TimeGridPalette};
use crate::ui_egui::views::time_grid::{draw_snap_cursor, render_time_grid, GridLayout};

/// Duration of the snapping cursor glide between rows
const CURSOR_GLIDE_SECS: f32 = 0.2;

pub struct SlotCalendarApp {
    settings: Settings,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    controller: SelectionController,
    /// Most recent finished selection, shown under the grid
    last_selection: Option<CompletedSelection>,
}

impl eframe::App for SlotCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_calendar(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}

impl SlotCalendarApp {
    fn grid_layout(&self) -> GridLayout {
        GridLayout {
            slot_height: self.settings.slot_height,
            grid_width: self.settings.grid_width,
        }
    }

    fn render_calendar(&mut self, ui: &mut egui::Ui) {
        let grid_palette = TimeGridPalette::from_theme(&self.active_theme);
        let card_palette = EventCardPalette::from_theme(&self.active_theme);
        let layout = self.grid_layout();
        let labeler = *self.controller.labeler();

        let size = layout.total_size(&labeler.schedule());
        let free_height = ui.available_height() - size.y - status_bar::STATUS_BAR_HEIGHT;
        let top_space = (free_height / 2.0).max(0.0);

        ui.vertical_centered(|ui| {
            ui.add_space(top_space);

            let grid = render_time_grid(
                ui,
                &labeler,
                &layout,
                &grid_palette,
                !self.controller.is_dragging(),
            );

            let input = ui.input(|i| DragInput::read(i, grid.rect));
            let finished = DragManager::apply(&mut self.controller, input, Some(grid.bounds()));
            if let Some(done) = finished {
                self.finish_selection(done);
            }

            let cursor_top = ui.ctx().animate_value_with_time(
                ui.id().with("snap_cursor"),
                self.controller.cursor_top(),
                CURSOR_GLIDE_SECS,
            );
            draw_snap_cursor(ui, grid.rect, cursor_top, &grid_palette);

            let props = EventCardProps {
                visible: self.controller.is_dragging(),
                rect: self.controller.rect(),
                label: self.controller.label(),
                event_name: &self.settings.event_name,
                direction: self.controller.direction(),
                slots_spanned: self.controller.slots_spanned(),
            };
            render_event_card(ui, ui.id().with("event_card"), grid.rect, &props, &card_palette);

            if self.controller.is_dragging() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            } else if grid.response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            self.render_status_bar(ui);
        });
    }

    fn finish_selection(&mut self, done: CompletedSelection) {
        log::info!(
            "Selected {} ({} slot{})",
            done.label,
            done.slots_spanned(),
            if done.slots_spanned() == 1 { "" } else { "s" }
        );
        self.last_selection = Some(done);
    }
}
