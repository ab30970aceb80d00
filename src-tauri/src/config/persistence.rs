//! Settings persistence: a JSON file in the app config directory, mirrored
//! by an in-memory copy behind a mutex.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{info, warn};

use super::schema::AppSettings;

const SETTINGS_FILE: &str = "settings.json";

/// Managed state owning the current settings and where they live on disk.
pub struct SettingsManager {
    settings: Mutex<AppSettings>,
    path: PathBuf,
}

impl SettingsManager {
    /// Load settings from `{config_dir}/settings.json`.
    ///
    /// A missing or unreadable file falls back to defaults; the file is only
    /// written on the first `set`/`update`.
    pub fn load(config_dir: &Path) -> Self {
        if let Err(e) = fs::create_dir_all(config_dir) {
            warn!("Failed to create config dir {}: {}", config_dir.display(), e);
        }
        let path = config_dir.join(SETTINGS_FILE);
        let settings = load_settings(&path);
        Self {
            settings: Mutex::new(settings),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> AppSettings {
        match self.settings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Persist `settings`, then make them current.
    pub fn set(&self, settings: AppSettings) -> Result<(), String> {
        save_settings(&self.path, &settings)?;
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        *guard = settings;
        Ok(())
    }

    /// Mutate the current settings in place and persist the result.
    pub fn update<F>(&self, updater: F) -> Result<AppSettings, String>
    where
        F: FnOnce(&mut AppSettings),
    {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        let mut next = guard.clone();
        updater(&mut next);
        save_settings(&self.path, &next)?;
        *guard = next.clone();
        Ok(next)
    }
}

fn load_settings(path: &Path) -> AppSettings {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => {
            info!("No settings at {}, using defaults", path.display());
            return AppSettings::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Invalid settings file {}: {} (using defaults)", path.display(), e);
            AppSettings::default()
        }
    }
}

fn save_settings(path: &Path, settings: &AppSettings) -> Result<(), String> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Failed to write settings: {}", e))?;
    info!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::load(dir.path());
        assert_eq!(manager.get(), AppSettings::default());
        assert!(!manager.path().exists());
    }

    #[test]
    fn test_set_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::load(dir.path());
        let mut settings = manager.get();
        settings.enable_ctrl_n = false;
        settings.panel_width = 512;
        manager.set(settings.clone()).unwrap();

        assert_eq!(manager.get(), settings);
        let reloaded = SettingsManager::load(dir.path());
        assert_eq!(reloaded.get(), settings);
    }

    #[test]
    fn test_update_returns_new_settings() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::load(dir.path());
        let updated = manager.update(|s| s.close_to_tray = false).unwrap();
        assert!(!updated.close_to_tray);
        assert!(!manager.get().close_to_tray);
        assert!(manager.path().exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        let manager = SettingsManager::load(dir.path());
        assert_eq!(manager.get(), AppSettings::default());
    }

    #[test]
    fn test_set_fails_when_directory_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SettingsManager::load(&dir.path().join("nested"));
        fs::remove_dir_all(dir.path().join("nested")).unwrap();
        let mut settings = manager.get();
        settings.enable_ctrl_n = false;
        assert!(manager.set(settings).is_err());
        // In-memory copy is untouched when the write fails
        assert!(manager.get().enable_ctrl_n);
    }
}
