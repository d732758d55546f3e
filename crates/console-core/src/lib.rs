//! # console-core - Core Domain Types
//!
//! Foundation crate for the scheduler console bindings. Provides domain types,
//! the markup tree, data scopes, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`LinkTarget`] - Formatted value plus role/environment for link components
//! - [`InstanceRecord`], [`InstanceStats`] - Inputs of the instance grid
//! - [`ConfigGroup`], [`InstanceRange`] - Configuration groups for summaries
//! - [`Timestamp`], [`UpdateSettings`] - Inputs of the time and update summaries
//!
//! ### Markup (`markup`)
//! - [`Markup`], [`Element`] - Tree built by procedural components
//!
//! ### Scope (`scope`)
//! - [`Scope`] - Explicit data context handed to templates
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use console_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod markup;
pub mod scope;
pub mod types;

/// Prelude for common imports used throughout the console crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use markup::{Element, Markup};
pub use scope::Scope;
pub use types::{
    ConfigGroup, InstanceRange, InstanceRecord, InstanceStats, LinkTarget, Timestamp,
    UpdateSettings,
};
