//! Pointer-to-slot coordinate conversion.

/// Vertical extent of the rendered grid in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub top: f32,
    pub height: f32,
}

impl GridBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Offset of the pointer from the top of the grid.
    /// A missing pointer position (e.g. a touch with no touch points) reads as 0.
    pub fn offset_of(&self, pointer_y: Option<f32>) -> f32 {
        pointer_y.map_or(0.0, |y| y - self.top)
    }

    /// Slot index under the given screen-space pointer position
    pub fn slot_index_at(&self, pointer_y: Option<f32>, slot_height: f32) -> usize {
        slot_index_for_offset(self.offset_of(pointer_y), slot_height, self.height)
    }
}

/// Clamp an offset into `[0, grid_height]`; non-finite input reads as 0.
pub fn clamp_offset(offset: f32, grid_height: f32) -> f32 {
    if !offset.is_finite() {
        return 0.0;
    }
    offset.clamp(0.0, grid_height.max(0.0))
}

/// `floor(offset / slot_height)` after clamping the offset into the grid.
pub fn slot_index_for_offset(offset: f32, slot_height: f32, grid_height: f32) -> usize {
    if !(slot_height.is_finite() && slot_height > 0.0) {
        return 0;
    }
    (clamp_offset(offset, grid_height) / slot_height).floor() as usize
}

/// Top pixel of the row with the given index
pub fn slot_top(index: usize, slot_height: f32) -> f32 {
    index as f32 * slot_height
}
