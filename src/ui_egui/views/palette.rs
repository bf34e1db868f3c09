use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub background: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub label: Color32,
    pub cursor: Color32,
    pub hover_overlay: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            background: theme.grid_background,
            hour_line: theme.hour_line,
            slot_line: with_alpha(theme.slot_line, 170),
            label: theme.text_secondary,
            cursor: theme.cursor_line,
            hover_overlay: with_alpha(theme.hour_line, if theme.is_dark { 40 } else { 60 }),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct EventCardPalette {
    pub fill: Color32,
    pub text: Color32,
    /// Faint outline so the card reads against a fill of similar tone
    pub outline: Color32,
}

impl EventCardPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        let edge_target = if theme.is_dark {
            Color32::WHITE
        } else {
            Color32::BLACK
        };
        Self {
            fill: theme.event_background,
            text: theme.event_text,
            outline: blend(theme.event_background, edge_target, 0.15),
        }
    }

    /// Same palette faded by the card's current opacity
    pub fn faded(&self, opacity: f32) -> Self {
        Self {
            fill: self.fill.gamma_multiply(opacity),
            text: self.text.gamma_multiply(opacity),
            outline: self.outline.gamma_multiply(opacity),
        }
    }
}
