// Drag input bridge
//
// Turns one frame of egui pointer input into controller calls.
// - Press: only counts when it lands inside the grid
// - Move/release: read window-wide, so a drag keeps tracking after the
//   pointer leaves the grid and ends wherever the button is released
// Touch input arrives through the same primary pointer.

use egui::{Event, InputState, Rect};

use crate::models::selection::CompletedSelection;
use crate::services::selection::SelectionController;
use crate::utils::geometry::GridBounds;

/// Pointer activity for a single frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragInput {
    /// Primary button went down inside the grid this frame
    pub pressed_inside: bool,
    /// Latest vertical pointer position in screen space
    pub pointer_y: Option<f32>,
    /// Pointer moved this frame
    pub moved: bool,
    /// Primary button went up this frame
    pub released: bool,
}

impl DragInput {
    pub fn read(input: &InputState, grid: Rect) -> Self {
        let pointer = &input.pointer;
        let pressed_inside = pointer.primary_pressed()
            && pointer
                .press_origin()
                .map_or(false, |origin| grid.contains(origin));

        // Touch end and leaving the window clear `latest_pos` in the same
        // frame as the final move; fall back to that move's position.
        let last_moved_y = input.events.iter().rev().find_map(|event| match event {
            Event::PointerMoved(pos) => Some(pos.y),
            _ => None,
        });

        Self {
            pressed_inside,
            pointer_y: pointer.latest_pos().map(|pos| pos.y).or(last_moved_y),
            moved: last_moved_y.is_some(),
            released: pointer.primary_released(),
        }
    }
}

pub struct DragManager;

impl DragManager {
    /// Feed one frame of input to the controller.
    ///
    /// `grid` is `None` until the grid has been laid out; in that case every
    /// handler is a no-op apart from release, which always ends the gesture.
    pub fn apply(
        controller: &mut SelectionController,
        input: DragInput,
        grid: Option<GridBounds>,
    ) -> Option<CompletedSelection> {
        if input.pressed_inside {
            controller.pointer_down(grid, input.pointer_y);
        }

        // A move with no known position keeps the last live row
        if input.moved && input.pointer_y.is_some() {
            controller.pointer_move(grid, input.pointer_y);
        }

        if input.released {
            return controller.pointer_up();
        }

        None
    }
}
