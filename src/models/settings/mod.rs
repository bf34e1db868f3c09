// Settings module
// Widget configuration read from settings.toml; every key is optional

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::DEFAULT_EVENT_NAME;
use super::schedule::{Schedule, DEFAULT_END_HOUR, DEFAULT_START_HOUR};

/// Pixel height of one 15-minute slot
pub const DEFAULT_SLOT_HEIGHT: f32 = 15.0;
/// Width of the slot column
pub const DEFAULT_GRID_WIDTH: f32 = 270.0;
/// Card fill color
pub const DEFAULT_ACCENT_COLOR: &str = "#0090FF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// "1:30 PM", with ":00" dropped on the full hour
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// "13:30"
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("start hour {start} must be before end hour {end}, and end hour at most 24")]
    InvalidHourRange { start: u32, end: u32 },
    #[error("slot height must be a positive number of pixels, got {0}")]
    InvalidSlotHeight(f32),
    #[error("grid width must be a positive number of pixels, got {0}")]
    InvalidGridWidth(f32),
    #[error("accent color must be in hex format (#RRGGBB), got {0:?}")]
    InvalidColor(String),
    #[error("event name cannot be empty")]
    EmptyEventName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub use_system_theme: bool,
    pub time_format: TimeFormat,
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_height: f32,
    pub grid_width: f32,
    pub event_name: String,
    pub accent_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            use_system_theme: false,
            time_format: TimeFormat::TwelveHour,
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot_height: DEFAULT_SLOT_HEIGHT,
            grid_width: DEFAULT_GRID_WIDTH,
            event_name: DEFAULT_EVENT_NAME.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(SettingsError::InvalidHourRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }

        if !(self.slot_height.is_finite() && self.slot_height > 0.0) {
            return Err(SettingsError::InvalidSlotHeight(self.slot_height));
        }

        if !(self.grid_width.is_finite() && self.grid_width > 0.0) {
            return Err(SettingsError::InvalidGridWidth(self.grid_width));
        }

        let hex = self.accent_color.trim_start_matches('#');
        if !self.accent_color.starts_with('#')
            || hex.len() != 6
            || !hex.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(SettingsError::InvalidColor(self.accent_color.clone()));
        }

        if self.event_name.trim().is_empty() {
            return Err(SettingsError::EmptyEventName);
        }

        Ok(())
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.start_hour, self.end_hour)
    }

    pub fn prefers_dark(&self) -> bool {
        self.theme.to_lowercase().contains("dark")
    }
}
