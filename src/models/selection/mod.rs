// Selection model
// Transient state of a single drag gesture over the time grid

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Which way the card grows from its anchor row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragDirection {
    Up,
    #[default]
    Down,
}

impl DragDirection {
    pub fn between(anchor: usize, live: usize) -> Self {
        if live < anchor {
            DragDirection::Up
        } else {
            DragDirection::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Anchor row where the drag started
    pub start_index: usize,
    /// Row currently under the pointer
    pub end_index: usize,
    pub dragging: bool,
    pub direction: DragDirection,
}

impl SelectionState {
    pub fn slots_spanned(&self) -> usize {
        self.start_index.abs_diff(self.end_index)
    }

    /// Endpoints in chronological order
    pub fn ordered(&self) -> (usize, usize) {
        (
            self.start_index.min(self.end_index),
            self.start_index.max(self.end_index),
        )
    }
}

/// Pixel rectangle of the event card, relative to the top of the grid.
///
/// `top` stays on the anchor row for the whole gesture. Upward drags are
/// expressed through a negative `transform_y` so the card grows without its
/// top edge jumping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventRect {
    pub top: f32,
    pub height: f32,
    pub transform_y: f32,
}

impl EventRect {
    pub fn anchored(anchor: usize, slot_height: f32) -> Self {
        Self {
            top: anchor as f32 * slot_height,
            height: 0.0,
            transform_y: 0.0,
        }
    }

    pub fn spanning(anchor: usize, live: usize, slot_height: f32) -> Self {
        let height = anchor.abs_diff(live) as f32 * slot_height;
        Self {
            top: anchor as f32 * slot_height,
            height,
            transform_y: if live < anchor { -height } else { 0.0 },
        }
    }

    /// Top edge after the vertical transform is applied
    pub fn visual_top(&self) -> f32 {
        self.top + self.transform_y
    }

    pub fn collapse(&mut self) {
        self.height = 0.0;
        self.transform_y = 0.0;
    }
}

/// A finished gesture, handed to the host on pointer-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSelection {
    pub start_index: usize,
    pub end_index: usize,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub label: String,
}

impl CompletedSelection {
    pub fn slots_spanned(&self) -> usize {
        self.end_index - self.start_index
    }
}
