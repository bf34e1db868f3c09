//! Fixed schedule shown by the time grid.
//!
//! A schedule is a run of whole hours split into 15-minute slots. Every hour
//! except the closing one contributes an hour row plus three quarter rows; the
//! closing hour contributes only its hour row so the grid ends on a boundary.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Minutes covered by one slot
pub const SLOT_INTERVAL: i64 = 15;
/// Slots in one hour block
pub const SLOTS_PER_HOUR: usize = 4;
/// First hour shown when nothing else is configured (1 PM)
pub const DEFAULT_START_HOUR: u32 = 13;
/// Closing hour shown when nothing else is configured (5 PM)
pub const DEFAULT_END_HOUR: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

/// One hour of the grid: the hour row and the quarter rows hanging off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBlock {
    pub hour: u32,
    /// Slot index of the hour row itself
    pub first_index: usize,
    /// Slot indexes of the quarter rows (empty for the closing hour)
    pub quarter_indexes: Vec<usize>,
}

impl HourBlock {
    pub fn row_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.first_index).chain(self.quarter_indexes.iter().copied())
    }
}

impl Schedule {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn hour_span(&self) -> usize {
        self.end_hour.saturating_sub(self.start_hour) as usize
    }

    /// Number of rendered rows, including the closing hour row.
    pub fn row_count(&self) -> usize {
        self.hour_span() * SLOTS_PER_HOUR + 1
    }

    /// Pixel height of the whole grid for the given slot height.
    pub fn grid_height(&self, slot_height: f32) -> f32 {
        self.row_count() as f32 * slot_height
    }

    pub fn base_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.start_hour % 24, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Time at the top edge of the slot with the given index.
    ///
    /// Indexes past the end of the grid keep counting in 15-minute steps and
    /// wrap at midnight. The bottom edge of the grid (an offset equal to the
    /// grid height) snaps to index `row_count()`, one slot past the closing
    /// hour row: 17 labels 5:15 PM on the default 13:00-17:00 schedule.
    pub fn time_at(&self, index: usize) -> NaiveTime {
        let minutes = index as i64 * SLOT_INTERVAL;
        let (time, _) = self
            .base_time()
            .overflowing_add_signed(Duration::minutes(minutes));
        time
    }

    pub fn hour_blocks(&self) -> Vec<HourBlock> {
        let span = self.hour_span();
        (0..=span)
            .map(|offset| {
                let first_index = offset * SLOTS_PER_HOUR;
                let quarter_indexes = if offset < span {
                    (1..SLOTS_PER_HOUR).map(|q| first_index + q).collect()
                } else {
                    Vec::new()
                };
                HourBlock {
                    hour: self.start_hour + offset as u32,
                    first_index,
                    quarter_indexes,
                }
            })
            .collect()
    }

    pub fn is_hour_start(index: usize) -> bool {
        index % SLOTS_PER_HOUR == 0
    }
}
