use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

fn default_catalog_base_url() -> String {
    global_constants::DEFAULT_CATALOG_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_image_timeout_secs() -> u64 {
    global_constants::DEFAULT_IMAGE_TIMEOUT_SECS
}

#[derive(Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_catalog_base_url")]
    pub catalog_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_image_timeout_secs")]
    pub image_timeout_secs: u64,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl fmt::Debug for UserSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSettings")
            .field("api_key_configured", &self.has_api_key())
            .field("catalog_base_url", &self.catalog_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("image_timeout_secs", &self.image_timeout_secs)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            catalog_base_url: default_catalog_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            image_timeout_secs: default_image_timeout_secs(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        let mut settings = Self::load_from_path(&settings_path)?;

        settings.apply_api_key_override(std::env::var(global_constants::API_KEY_ENV_VAR).ok());

        if !settings.has_api_key() {
            log::warn!(
                "[SETTINGS] No API key configured; set {} or api_key in {:?}",
                global_constants::API_KEY_ENV_VAR,
                settings_path
            );
        }

        Ok(settings)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Catalog URL: {}", settings.catalog_base_url);
        log::debug!(
            "[SETTINGS] Timeouts: request={}s image={}s",
            settings.request_timeout_secs,
            settings.image_timeout_secs
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn apply_api_key_override(&mut self, env_value: Option<String>) {
        if let Some(key) = env_value.filter(|key| !key.trim().is_empty()) {
            log::debug!(
                "[SETTINGS] Using API key from {}",
                global_constants::API_KEY_ENV_VAR
            );
            self.api_key = key.trim().to_string();
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs.max(1))
    }

    pub fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("artwork-search-test")
            .join(format!("{}-{}", name, std::process::id()));
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert!(settings.api_key.is_empty());
        assert!(!settings.has_api_key());
        assert_eq!(
            settings.catalog_base_url,
            global_constants::DEFAULT_CATALOG_BASE_URL
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.image_timeout(), Duration::from_secs(20));
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_partial_settings_file_fills_in_defaults() {
        let json = r#"{ "api_key": "abc-123", "theme_mode": "Light" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.api_key, "abc-123");
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(
            settings.catalog_base_url,
            global_constants::DEFAULT_CATALOG_BASE_URL
        );
        assert_eq!(
            settings.request_timeout_secs,
            global_constants::DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_zero_timeouts_are_clamped_to_one_second() {
        let settings = UserSettings {
            request_timeout_secs: 0,
            image_timeout_secs: 0,
            ..Default::default()
        };

        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
        assert_eq!(settings.image_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_environment_key_overrides_file_key() {
        let mut settings = UserSettings {
            api_key: "from-file".to_string(),
            ..Default::default()
        };

        settings.apply_api_key_override(Some("  from-env  ".to_string()));

        assert_eq!(settings.api_key, "from-env");
    }

    #[test]
    fn test_blank_or_missing_environment_key_keeps_file_key() {
        let mut settings = UserSettings {
            api_key: "from-file".to_string(),
            ..Default::default()
        };

        settings.apply_api_key_override(None);
        settings.apply_api_key_override(Some("   ".to_string()));

        assert_eq!(settings.api_key, "from-file");
    }

    #[test]
    fn test_debug_output_never_contains_api_key() {
        let settings = UserSettings {
            api_key: "super-secret".to_string(),
            ..Default::default()
        };

        let rendered = format!("{:?}", settings);

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("api_key_configured: true"));
    }

    #[test]
    fn test_load_from_missing_path_writes_defaults() {
        let dir = temp_settings_dir("missing");
        let path = dir.join("settings.json");

        let settings = UserSettings::load_from_path(&path).unwrap();

        assert!(path.exists());
        assert_eq!(
            settings.catalog_base_url,
            global_constants::DEFAULT_CATALOG_BASE_URL
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = temp_settings_dir("roundtrip");
        let path = dir.join("settings.json");
        let original = UserSettings {
            api_key: "roundtrip-key".to_string(),
            catalog_base_url: "http://localhost:9000/object".to_string(),
            request_timeout_secs: 5,
            image_timeout_secs: 7,
            theme_mode: ThemeMode::Light,
        };

        original.save_to_path(&path).unwrap();
        let loaded = UserSettings::load_from_path(&path).unwrap();

        assert_eq!(loaded.api_key, original.api_key);
        assert_eq!(loaded.catalog_base_url, original.catalog_base_url);
        assert_eq!(loaded.request_timeout_secs, 5);
        assert_eq!(loaded.image_timeout_secs, 7);
        assert_eq!(loaded.theme_mode, ThemeMode::Light);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_corrupt_file_is_an_error() {
        let dir = temp_settings_dir("corrupt");
        let path = dir.join("settings.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(UserSettings::load_from_path(&path).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
