use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Environment variable that overrides the settings file location
pub const SETTINGS_PATH_ENV: &str = "SLOT_CALENDAR_SETTINGS";

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Raw storage for the serialized settings document.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, contents: &str) -> Result<()>;
}

/// Settings kept in a TOML file on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$SLOT_CALENDAR_SETTINGS` if set, else in the platform config dir.
    pub fn from_environment() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        Ok(Some(data))
    }

    fn save(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

pub fn resolve_settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Some(dirs) = ProjectDirs::from("com", "RustCalendar", "SlotCalendar") {
        dirs.config_dir().join(SETTINGS_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.toml"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let store = FileSettingsStore::new(&path);

        store.save("slot_height = 20.0\n").unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap().as_deref(), Some("slot_height = 20.0\n"));
    }
}
