// Settings management and persistence
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub mode: String, // "light" or "dark"
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: "light".to_string(),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub version: i32, // Settings schema version for future migrations
    pub theme: ThemeSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            theme: ThemeSettings::default(),
        }
    }
}

/// Per-user configuration directory, e.g. `~/.config/morsesloth`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("morsesloth"))
}

impl AppSettings {
    /// Get the settings file path
    pub fn get_settings_path(app_dir: &PathBuf) -> PathBuf {
        app_dir.join("settings.json")
    }

    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load(app_dir: &PathBuf) -> Result<Self, String> {
        let path = Self::get_settings_path(app_dir);

        if !path.exists() {
            log::info!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse settings: {}", e))?;

        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, app_dir: &PathBuf) -> Result<(), String> {
        // Ensure directory exists
        fs::create_dir_all(app_dir)
            .map_err(|e| format!("Failed to create settings directory: {}", e))?;

        let path = Self::get_settings_path(app_dir);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        log::info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load(&dir.path().to_path_buf()).unwrap();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.theme.mode, "light");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("morsesloth");

        let mut settings = AppSettings::default();
        settings.theme.mode = "dark".to_string();
        settings.save(&app_dir).unwrap();

        let loaded = AppSettings::load(&app_dir).unwrap();
        assert_eq!(loaded.theme.mode, "dark");
        assert_eq!(loaded.version, 1);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().to_path_buf();
        fs::write(AppSettings::get_settings_path(&app_dir), "not json").unwrap();

        assert!(AppSettings::load(&app_dir).is_err());
    }
}
