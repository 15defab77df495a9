use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::{AppConfig, ResolvedConfig};

/// Return the path to the settings JSON file.
fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("hrdash")
            .join("settings.json");
    }
    std::env::temp_dir().join("hrdash").join("settings.json")
}

/// Load settings from `path`; a missing file yields defaults.
pub(super) fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load and validate settings from disk.
fn load_config() -> Result<ResolvedConfig, ConfigError> {
    load_config_from(&settings_path())?.resolve()
}

/// Load initial settings, falling back to defaults on error.
pub(crate) fn load_initial_config() -> ResolvedConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {err}");
            ResolvedConfig::default()
        },
    }
}
