//! Configuration file parsing for the console bindings
//!
//! Supports:
//! - `console.toml` - Link roots and template location

pub mod settings;
pub mod types;

pub use settings::{init_config, load_settings, save_settings, template_root, CONFIG_FILENAME};
pub use types::*;
