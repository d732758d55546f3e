//! Configuration types for the console bindings
//!
//! Defines:
//! - `Settings` - Contents of `console.toml`
//! - `LinkSettings` - URL roots used by the link components
//! - `TemplateSettings` - Where external templates are resolved from

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Binding layer settings (console.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub links: LinkSettings,

    #[serde(default)]
    pub templates: TemplateSettings,
}

/// URL roots for generated anchors
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Root segment of role, environment and job pages
    #[serde(default = "default_scheduler_root")]
    pub scheduler_root: String,

    /// Root segment of the raw task dump page
    #[serde(default = "default_task_root")]
    pub task_root: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            scheduler_root: default_scheduler_root(),
            task_root: default_task_root(),
        }
    }
}

fn default_scheduler_root() -> String {
    "/scheduler".to_string()
}

fn default_task_root() -> String {
    "/structdump/task".to_string()
}

/// Template resolution settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TemplateSettings {
    /// Directory holding the template files, relative to the config directory
    #[serde(default = "default_template_root")]
    pub root: PathBuf,

    /// Keep resolved templates in memory after the first read
    #[serde(default = "default_true")]
    pub cache: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            root: default_template_root(),
            cache: true,
        }
    }
}

fn default_template_root() -> PathBuf {
    PathBuf::from("templates")
}

fn default_true() -> bool {
    true
}
