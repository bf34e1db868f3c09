use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};

use super::store::SettingsStore;

pub struct SettingsService<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> SettingsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the current settings; defaults when nothing is stored
    pub fn get(&self) -> Result<Settings> {
        let Some(data) = self.store.load()? else {
            return Ok(Settings::default());
        };

        let settings: Settings = toml::from_str(&data).context("Failed to parse settings")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Like `get`, but never fails: problems are logged and defaults used.
    pub fn get_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        self.store.save(&data).context("Failed to update settings")?;

        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::TimeFormat;
    use crate::services::settings::store::MockSettingsStore;
    use mockall::predicate::*;

    #[test]
    fn test_get_default_settings_when_empty() {
        let mut store = MockSettingsStore::new();
        store.expect_load().times(1).returning(|| Ok(None));

        let service = SettingsService::new(store);
        let settings = service.get().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_get_parses_stored_document() {
        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .returning(|| Ok(Some("theme = \"dark\"\ntime_format = \"24h\"\n".to_string())));

        let settings = SettingsService::new(store).get().unwrap();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
    }

    #[test]
    fn test_get_rejects_invalid_values() {
        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .returning(|| Ok(Some("start_hour = 18\nend_hour = 9\n".to_string())));

        let err = SettingsService::new(store).get().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_get_or_default_on_read_failure() {
        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .returning(|| Err(anyhow!("permission denied")));

        let settings = SettingsService::new(store).get_or_default();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_get_or_default_on_garbage() {
        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .returning(|| Ok(Some("slot_height = \"tall\"".to_string())));

        let settings = SettingsService::new(store).get_or_default();
        assert_eq!(settings.slot_height, Settings::default().slot_height);
    }

    #[test]
    fn test_update_writes_toml() {
        let mut store = MockSettingsStore::new();
        store
            .expect_save()
            .with(function(|data: &str| data.contains("time_format = \"24h\"")))
            .times(1)
            .returning(|_| Ok(()));

        let settings = Settings {
            time_format: TimeFormat::TwentyFourHour,
            ..Settings::default()
        };
        SettingsService::new(store).update(&settings).unwrap();
    }

    #[test]
    fn test_update_refuses_invalid_settings() {
        let mut store = MockSettingsStore::new();
        store.expect_save().never();

        let settings = Settings {
            slot_height: 0.0,
            ..Settings::default()
        };
        assert!(SettingsService::new(store).update(&settings).is_err());
    }
}
