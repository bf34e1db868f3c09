//! Drag-selection controller.
//!
//! Owns the transient state of one drag gesture over the time grid:
//! `Idle -> Dragging -> Idle`. Pointer-down starts a gesture, pointer-move
//! updates the live end and the snapping cursor, pointer-up ends it. There is
//! no other way out of `Dragging`.
//!
//! The controller knows nothing about egui; callers hand it the grid bounds
//! (or `None` when the grid has not been laid out yet) and the pointer's
//! vertical screen position.

use crate::models::schedule::Schedule;
use crate::models::selection::{CompletedSelection, DragDirection, EventRect, SelectionState};
use crate::models::settings::{Settings, TimeFormat};
use crate::services::time_format::TimeLabeler;
use crate::utils::geometry::{slot_top, GridBounds};

#[derive(Debug, Clone)]
pub struct SelectionController {
    labeler: TimeLabeler,
    slot_height: f32,
    state: SelectionState,
    rect: EventRect,
    cursor_top: f32,
    label: String,
}

impl SelectionController {
    pub fn new(schedule: Schedule, time_format: TimeFormat, slot_height: f32) -> Self {
        Self {
            labeler: TimeLabeler::new(schedule, time_format),
            slot_height,
            state: SelectionState::default(),
            rect: EventRect::default(),
            cursor_top: 0.0,
            label: String::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.schedule(), settings.time_format, settings.slot_height)
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn rect(&self) -> EventRect {
        self.rect
    }

    pub fn cursor_top(&self) -> f32 {
        self.cursor_top
    }

    /// Formatted range of the current selection
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn direction(&self) -> DragDirection {
        self.state.direction
    }

    pub fn slots_spanned(&self) -> usize {
        self.state.slots_spanned()
    }

    pub fn labeler(&self) -> &TimeLabeler {
        &self.labeler
    }

    /// Start a gesture at the row under the pointer.
    pub fn pointer_down(&mut self, grid: Option<GridBounds>, pointer_y: Option<f32>) {
        let Some(grid) = grid else {
            return;
        };

        let index = grid.slot_index_at(pointer_y, self.slot_height);
        self.state = SelectionState {
            start_index: index,
            end_index: index,
            dragging: true,
            direction: DragDirection::Down,
        };
        self.rect = EventRect::anchored(index, self.slot_height);
        self.cursor_top = slot_top(index, self.slot_height);
        self.label = self.labeler.time_range(index, index);

        log::debug!("selection started at slot {} ({})", index, self.label);
    }

    /// Track the pointer. Returns true when the live end moved to a new row.
    pub fn pointer_move(&mut self, grid: Option<GridBounds>, pointer_y: Option<f32>) -> bool {
        let Some(grid) = grid else {
            return false;
        };

        let index = grid.slot_index_at(pointer_y, self.slot_height);
        self.cursor_top = slot_top(index, self.slot_height);

        if !self.state.dragging {
            return false;
        }

        let anchor = self.state.start_index;
        self.rect = EventRect::spanning(anchor, index, self.slot_height);

        if index == self.state.end_index {
            return false;
        }

        self.state.end_index = index;
        self.state.direction = DragDirection::between(anchor, index);
        self.label = self.labeler.time_range(anchor, index);

        log::debug!(
            "selection moved to slot {} ({:?}, {})",
            index,
            self.state.direction,
            self.label
        );
        true
    }

    /// End the gesture. Returns the finished selection if one was in progress.
    pub fn pointer_up(&mut self) -> Option<CompletedSelection> {
        let was_dragging = self.state.dragging;
        self.state.dragging = false;
        self.rect.collapse();

        if !was_dragging {
            return None;
        }

        let (start_index, end_index) = self.state.ordered();
        let schedule = self.labeler.schedule();
        let completed = CompletedSelection {
            start_index,
            end_index,
            start_time: schedule.time_at(start_index),
            end_time: schedule.time_at(end_index),
            label: self.labeler.time_range(start_index, end_index),
        };

        log::debug!("selection finished: {}", completed.label);
        Some(completed)
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.state = SelectionState::default();
        self.rect = EventRect::default();
        self.label.clear();
    }
}
