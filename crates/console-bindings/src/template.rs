//! Template resolution.
//!
//! Components that delegate rendering name a [`TemplateName`]; a
//! [`TemplateResolver`] supplied by the host maps it to markup text. Failures
//! are returned to the host as-is: no retry, no fallback markup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use console_core::prelude::*;
use console_core::Scope;

/// Logical names of the external templates used by the bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    Breadcrumb,
    Error,
    TaskSandbox,
    GroupSummary,
    ConfigSummary,
    TimeDisplay,
    UpdateSettings,
}

impl TemplateName {
    pub const ALL: [TemplateName; 7] = [
        TemplateName::Breadcrumb,
        TemplateName::Error,
        TemplateName::TaskSandbox,
        TemplateName::GroupSummary,
        TemplateName::ConfigSummary,
        TemplateName::TimeDisplay,
        TemplateName::UpdateSettings,
    ];

    /// File name under the template root
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateName::Breadcrumb => "breadcrumb.html",
            TemplateName::Error => "error.html",
            TemplateName::TaskSandbox => "taskSandbox.html",
            TemplateName::GroupSummary => "groupSummary.html",
            TemplateName::ConfigSummary => "configSummary.html",
            TemplateName::TimeDisplay => "timeDisplay.html",
            TemplateName::UpdateSettings => "updateSettings.html",
        }
    }

    /// URL path the host serves the template from
    pub fn url(&self) -> String {
        format!("/{}", self.file_name())
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Maps a logical template name to markup text
#[cfg_attr(test, mockall::automock)]
pub trait TemplateResolver {
    fn resolve(&self, name: TemplateName) -> Result<String>;
}

/// A resolved template together with the scope it must be rendered against
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBinding {
    pub template: TemplateName,
    pub markup: String,
    pub scope: Scope,
}

/// Resolve `name` and pair it with `scope`
pub fn bind_template(
    resolver: &dyn TemplateResolver,
    name: TemplateName,
    scope: Scope,
) -> Result<TemplateBinding> {
    let markup = resolver.resolve(name).map_err(|e| {
        warn!("Template {} failed to resolve: {}", name, e);
        e
    })?;
    debug!("Resolved template {} ({} bytes)", name, markup.len());
    Ok(TemplateBinding {
        template: name,
        markup,
        scope,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Filesystem resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Reads templates from a directory, optionally caching them after first use
#[derive(Debug)]
pub struct FileTemplateResolver {
    root: PathBuf,
    cache: Option<RefCell<HashMap<TemplateName, String>>>,
}

impl FileTemplateResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Some(RefCell::new(HashMap::new())),
        }
    }

    /// Read from disk on every resolution
    pub fn uncached(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: TemplateName) -> Result<String> {
        let path = self.root.join(name.file_name());
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::template_not_found(name.url()),
            _ => Error::template_read(name.url(), path, e),
        })
    }
}

impl TemplateResolver for FileTemplateResolver {
    fn resolve(&self, name: TemplateName) -> Result<String> {
        let Some(cache) = &self.cache else {
            return self.read(name);
        };

        if let Some(markup) = cache.borrow().get(&name) {
            trace!("Template cache hit for {}", name);
            return Ok(markup.clone());
        }

        let markup = self.read(name)?;
        cache.borrow_mut().insert(name, markup.clone());
        Ok(markup)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Serves templates registered up front, e.g. embedded in the host binary
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateResolver {
    templates: HashMap<TemplateName, String>,
}

impl StaticTemplateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: TemplateName, markup: impl Into<String>) -> Self {
        self.templates.insert(name, markup.into());
        self
    }
}

impl TemplateResolver for StaticTemplateResolver {
    fn resolve(&self, name: TemplateName) -> Result<String> {
        self.templates
            .get(&name)
            .cloned()
            .ok_or_else(|| Error::template_not_found(name.url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_template_urls() {
        assert_eq!(TemplateName::Breadcrumb.url(), "/breadcrumb.html");
        assert_eq!(TemplateName::TaskSandbox.url(), "/taskSandbox.html");
        assert_eq!(TemplateName::UpdateSettings.to_string(), "/updateSettings.html");
    }

    #[test]
    fn test_file_resolver_reads_template() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("error.html"), "<div class=\"error\"></div>").unwrap();

        let resolver = FileTemplateResolver::new(temp.path());
        let markup = resolver.resolve(TemplateName::Error).unwrap();
        assert_eq!(markup, "<div class=\"error\"></div>");
    }

    #[test]
    fn test_file_resolver_missing_template() {
        let temp = tempdir().unwrap();
        let resolver = FileTemplateResolver::new(temp.path());

        let err = resolver.resolve(TemplateName::Breadcrumb).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { ref name } if name == "/breadcrumb.html"));
    }

    #[test]
    fn test_file_resolver_caches_first_read() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("timeDisplay.html");
        std::fs::write(&path, "v1").unwrap();

        let resolver = FileTemplateResolver::new(temp.path());
        assert_eq!(resolver.resolve(TemplateName::TimeDisplay).unwrap(), "v1");

        std::fs::write(&path, "v2").unwrap();
        assert_eq!(resolver.resolve(TemplateName::TimeDisplay).unwrap(), "v1");
    }

    #[test]
    fn test_uncached_resolver_rereads() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("timeDisplay.html");
        std::fs::write(&path, "v1").unwrap();

        let resolver = FileTemplateResolver::uncached(temp.path());
        assert_eq!(resolver.resolve(TemplateName::TimeDisplay).unwrap(), "v1");

        std::fs::write(&path, "v2").unwrap();
        assert_eq!(resolver.resolve(TemplateName::TimeDisplay).unwrap(), "v2");
    }

    #[test]
    fn test_static_resolver() {
        let resolver = StaticTemplateResolver::new().with(TemplateName::Error, "<p>oops</p>");
        assert_eq!(resolver.resolve(TemplateName::Error).unwrap(), "<p>oops</p>");
        assert!(resolver.resolve(TemplateName::GroupSummary).is_err());
    }

    #[test]
    fn test_bind_template_propagates_failure() {
        let mut resolver = MockTemplateResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|name| Err(Error::template_not_found(name.url())));

        let result = bind_template(&resolver, TemplateName::ConfigSummary, Scope::new());
        assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
    }

    #[test]
    fn test_bind_template_carries_scope() {
        let resolver = StaticTemplateResolver::new().with(TemplateName::Error, "<p></p>");
        let scope = Scope::new().bind("error", "boom").unwrap();

        let binding = bind_template(&resolver, TemplateName::Error, scope.clone()).unwrap();
        assert_eq!(binding.template, TemplateName::Error);
        assert_eq!(binding.scope, scope);
    }
}
