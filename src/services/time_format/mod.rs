//! Slot index to time label conversion.
//!
//! Purely formatting: no timezone or locale handling.

use chrono::{NaiveTime, Timelike};

use crate::models::schedule::Schedule;
use crate::models::settings::TimeFormat;

/// Format a wall-clock time in the given scheme.
pub fn format_time(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => {
            let (is_pm, hour) = time.hour12();
            let suffix = if is_pm { "PM" } else { "AM" };
            if time.minute() == 0 {
                format!("{} {}", hour, suffix)
            } else {
                format!("{}:{:02} {}", hour, time.minute(), suffix)
            }
        }
        TimeFormat::TwentyFourHour => format!("{:02}:{:02}", time.hour(), time.minute()),
    }
}

/// Converts between slot indexes and display strings for one schedule.
#[derive(Debug, Clone, Copy)]
pub struct TimeLabeler {
    schedule: Schedule,
    format: TimeFormat,
}

impl TimeLabeler {
    pub fn new(schedule: Schedule, format: TimeFormat) -> Self {
        Self { schedule, format }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn time_from_index(&self, index: usize) -> String {
        format_time(self.schedule.time_at(index), self.format)
    }

    /// Label for an hour row, always on the full hour
    pub fn hour_label(&self, hour: u32) -> String {
        let time = NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or(NaiveTime::MIN);
        format_time(time, self.format)
    }

    /// `"<start> - <end>"` with the endpoints in chronological order.
    pub fn time_range(&self, a: usize, b: usize) -> String {
        let (start, end) = (a.min(b), a.max(b));
        format!(
            "{} - {}",
            self.time_from_index(start),
            self.time_from_index(end)
        )
    }
}
