//! Settings parser for console.toml

use super::types::Settings;
use console_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "console.toml";

/// Load settings from `dir/console.toml`
///
/// Returns default settings when the file is absent, unreadable or invalid.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Save settings to `dir/console.toml`
///
/// Writes to a temporary file first and renames it over the target.
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    let temp_path = dir.join(".console.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", CONFIG_HEADER, content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Write a default `console.toml` unless one already exists
pub fn init_config(dir: &Path) -> Result<()> {
    if dir.join(CONFIG_FILENAME).exists() {
        return Ok(());
    }
    save_settings(dir, &Settings::default())
}

/// Template directory from settings, resolved against the config directory
pub fn template_root(dir: &Path, settings: &Settings) -> PathBuf {
    let root = &settings.templates.root;
    if root.is_absolute() {
        root.clone()
    } else {
        dir.join(root)
    }
}

const CONFIG_HEADER: &str = "# Scheduler console bindings configuration\n\n";
