//! Theme module for the slot calendar widget
//!
//! Defines the CalendarTheme structure and the hex color parsing used by the
//! `accent_color` setting.

use egui::Color32;

use crate::models::settings::Settings;

/// A calendar theme defining all colors used by the widget
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Page background behind the grid
    pub app_background: Color32,

    /// Slot row background
    pub grid_background: Color32,

    /// Line at the top of each hour row
    pub hour_line: Color32,

    /// Line at the top of each quarter row
    pub slot_line: Color32,

    /// Hour label text color
    pub text_secondary: Color32,

    /// Snapping cursor line color
    pub cursor_line: Color32,

    /// Event card fill
    pub event_background: Color32,

    /// Event card text
    pub event_text: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(250, 250, 250),
            grid_background: Color32::from_rgb(250, 250, 250),
            hour_line: Color32::from_rgb(229, 231, 235),
            slot_line: Color32::from_rgb(229, 231, 235),
            text_secondary: Color32::from_rgb(75, 85, 99),
            cursor_line: Color32::from_rgb(55, 65, 81),
            event_background: Color32::from_rgb(0, 144, 255),
            event_text: Color32::WHITE,
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(38, 38, 38),
            grid_background: Color32::from_rgb(38, 38, 38),
            hour_line: Color32::from_rgb(82, 82, 82),
            slot_line: Color32::from_rgb(64, 64, 64),
            text_secondary: Color32::from_rgb(163, 163, 163),
            cursor_line: Color32::from_rgb(212, 212, 212),
            event_background: Color32::from_rgb(0, 144, 255),
            event_text: Color32::WHITE,
        }
    }

    /// Pick the theme named by settings, following the OS when asked to,
    /// and apply the configured accent color.
    pub fn from_settings(settings: &Settings) -> Self {
        let dark = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => settings.prefers_dark(),
            }
        } else {
            settings.prefers_dark()
        };

        let mut theme = if dark { Self::dark() } else { Self::light() };
        match Self::hex_to_color(&settings.accent_color) {
            Ok(color) => theme.event_background = color,
            Err(e) => log::warn!("Ignoring accent color '{}': {}", settings.accent_color, e),
        }
        theme
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        ctx.set_visuals(visuals);
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}
