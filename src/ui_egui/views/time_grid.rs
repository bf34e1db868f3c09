//! Time grid rendering for the slot picker.
//!
//! Draws the hour labels and the hour/quarter rows, and returns the grid
//! rectangle together with its interaction response. Purely presentational:
//! all selection state lives in the controller.

use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::TimeGridPalette;
use crate::models::schedule::Schedule;
use crate::services::time_format::TimeLabeler;
use crate::utils::geometry::{slot_index_for_offset, slot_top, GridBounds};

/// Width reserved left of the grid for hour labels
pub const TIME_LABEL_WIDTH: f32 = 48.0;
const LABEL_GAP: f32 = 8.0;
const HOUR_LINE_WIDTH: f32 = 2.0;
const SLOT_LINE_WIDTH: f32 = 1.0;
const CURSOR_LINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub slot_height: f32,
    pub grid_width: f32,
}

impl GridLayout {
    pub fn total_size(&self, schedule: &Schedule) -> Vec2 {
        Vec2::new(
            TIME_LABEL_WIDTH + self.grid_width,
            schedule.grid_height(self.slot_height),
        )
    }
}

pub struct TimeGridResponse {
    /// Slot column only, without the label gutter
    pub rect: Rect,
    pub response: egui::Response,
}

impl TimeGridResponse {
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.rect.top(), self.rect.height())
    }
}

/// Render the hour blocks of `labeler`'s schedule.
pub(crate) fn render_time_grid(
    ui: &mut egui::Ui,
    labeler: &TimeLabeler,
    layout: &GridLayout,
    palette: &TimeGridPalette,
    highlight_hover: bool,
) -> TimeGridResponse {
    let schedule = labeler.schedule();
    let (outer, _) = ui.allocate_exact_size(layout.total_size(&schedule), Sense::hover());
    let rect = Rect::from_min_max(
        Pos2::new(outer.left() + TIME_LABEL_WIDTH, outer.top()),
        outer.max,
    );

    // Drag sense keeps touch drags from scrolling any parent area
    let response = ui.interact(rect, ui.id().with("slot_grid"), Sense::click_and_drag());

    let painter = ui.painter_at(outer.expand(HOUR_LINE_WIDTH));
    painter.rect_filled(rect, 0.0, palette.background);

    if highlight_hover {
        if let Some(pos) = response.hover_pos() {
            let offset = pos.y - rect.top();
            let index = slot_index_for_offset(offset, layout.slot_height, rect.height());
            if index < schedule.row_count() {
                let top = rect.top() + slot_top(index, layout.slot_height);
                let row = Rect::from_min_size(
                    Pos2::new(rect.left(), top),
                    Vec2::new(rect.width(), layout.slot_height),
                );
                painter.rect_filled(row, 0.0, palette.hover_overlay);
            }
        }
    }

    for block in schedule.hour_blocks() {
        for index in block.row_indexes() {
            let y = rect.top() + slot_top(index, layout.slot_height);
            let stroke = if Schedule::is_hour_start(index) {
                Stroke::new(HOUR_LINE_WIDTH, palette.hour_line)
            } else {
                Stroke::new(SLOT_LINE_WIDTH, palette.slot_line)
            };
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        }

        let y = rect.top() + slot_top(block.first_index, layout.slot_height);
        painter.text(
            Pos2::new(rect.left() - LABEL_GAP, y),
            Align2::RIGHT_CENTER,
            labeler.hour_label(block.hour),
            FontId::proportional(12.0),
            palette.label,
        );
    }

    TimeGridResponse { rect, response }
}

/// Draw the snapping cursor line at `offset` pixels below the grid top.
pub(crate) fn draw_snap_cursor(ui: &egui::Ui, grid: Rect, offset: f32, palette: &TimeGridPalette) {
    let y = grid.top() + offset;
    ui.painter().line_segment(
        [Pos2::new(grid.left(), y), Pos2::new(grid.right(), y)],
        Stroke::new(CURSOR_LINE_WIDTH, palette.cursor),
    );
}
