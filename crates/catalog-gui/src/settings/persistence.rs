//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific application data folder:
//! - macOS: ~/Library/Application Support/com.candidate-catalog.Drug Candidate Catalog/
//! - Windows: %APPDATA%/candidate-catalog/config/
//! - Linux: ~/.config/candidatecatalog/

use super::Settings;
use anyhow::Context;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "candidate-catalog";
const APP_NAME: &str = "Drug Candidate Catalog";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from disk.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be parsed
/// - The platform-specific directory cannot be determined
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to disk.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    let path = settings_path().context("could not determine settings path")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create config directory")?;
    }

    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(&path, content).with_context(|| format!("write settings file {path:?}"))?;
    Ok(())
}
