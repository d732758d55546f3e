//! Console binding error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Binding layer error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Template Resolution Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("Failed to read template {name} from {path}: {reason}")]
    TemplateRead {
        name: String,
        path: PathBuf,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Component Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("Malformed input for {component}: {message}")]
    MalformedInput { component: String, message: String },

    #[error("Missing required input '{input}' for {component}")]
    MissingInput { component: String, input: String },

    #[error("DOM node {0} does not exist")]
    NodeNotFound(usize),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }

    pub fn template_read(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::TemplateRead {
            name: name.into(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }

    pub fn malformed_input(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn missing_input(component: impl Into<String>, input: impl Into<String>) -> Self {
        Self::MissingInput {
            component: component.into(),
            input: input.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors fail a single component render; sibling components
    /// keep rendering and the host shows a placeholder.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::TemplateNotFound { .. }
                | Error::TemplateRead { .. }
                | Error::MalformedInput { .. }
                | Error::MissingInput { .. }
                | Error::Json(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::template_not_found("/breadcrumb.html");
        assert_eq!(err.to_string(), "Template not found: /breadcrumb.html");

        let err = Error::missing_input("groupSummary", "groups");
        assert_eq!(
            err.to_string(),
            "Missing required input 'groups' for groupSummary"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_template_errors_are_recoverable() {
        assert!(Error::template_not_found("/error.html").is_recoverable());
        assert!(Error::template_read("/error.html", "/tmp/error.html", "denied").is_recoverable());
    }

    #[test]
    fn test_template_read_mentions_path() {
        let err = Error::template_read("/timeDisplay.html", "/srv/ui/timeDisplay.html", "denied");
        assert!(err.to_string().contains("/srv/ui/timeDisplay.html"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_config_and_lookup_errors_are_not_recoverable() {
        assert!(!Error::config("missing").is_recoverable());
        assert!(!Error::unknown_component("podList").is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::unknown_component("fooBar");
        let _ = Error::malformed_input("instanceSummary", "instances is not a list");
        let _ = Error::NodeNotFound(3);
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading template").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
