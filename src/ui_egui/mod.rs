mod app;
pub mod drag;
pub mod theme;
mod views;

pub use app::SlotCalendarApp;
