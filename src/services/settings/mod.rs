// Settings persistence: TOML document behind a swappable store

mod service;
mod store;

pub use service::SettingsService;
pub use store::{resolve_settings_path, FileSettingsStore, SettingsStore, SETTINGS_PATH_ENV};
