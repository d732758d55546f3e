//! Single-input summary components: configuration group, timestamp and
//! update settings. Each reads its input through a shared reference and never
//! changes it.

use console_core::prelude::*;
use console_core::{ConfigGroup, Scope, Timestamp, UpdateSettings};

use super::TemplateComponent;
use crate::registry::ComponentId;
use crate::template::TemplateName;

/// `<config-summary group="...">`
#[derive(Debug, Clone, Copy)]
pub struct ConfigSummary<'a> {
    pub group: &'a ConfigGroup,
}

impl<'a> ConfigSummary<'a> {
    pub fn new(group: &'a ConfigGroup) -> Self {
        Self { group }
    }
}

impl TemplateComponent for ConfigSummary<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::ConfigSummary
    }

    fn template(&self) -> TemplateName {
        TemplateName::ConfigSummary
    }

    fn scope(&self) -> Result<Scope> {
        Scope::new().bind("group", self.group)
    }
}

/// `<time-display timestamp="...">`
#[derive(Debug, Clone, Copy)]
pub struct TimeDisplay {
    pub timestamp: Timestamp,
}

impl TimeDisplay {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }
}

impl TemplateComponent for TimeDisplay {
    fn id(&self) -> ComponentId {
        ComponentId::TimeDisplay
    }

    fn template(&self) -> TemplateName {
        TemplateName::TimeDisplay
    }

    // Out-of-range timestamps still bind; the template just has less to show.
    fn scope(&self) -> Result<Scope> {
        let mut scope = Scope::new().bind("timestamp", &self.timestamp)?;
        if let Some(dt) = self.timestamp.to_datetime() {
            scope.insert("utc", &dt.to_rfc3339())?;
        }
        Ok(scope)
    }
}

/// `<update-settings update="...">`
#[derive(Debug, Clone, Copy)]
pub struct UpdateSettingsSummary<'a> {
    pub update: &'a UpdateSettings,
}

impl<'a> UpdateSettingsSummary<'a> {
    pub fn new(update: &'a UpdateSettings) -> Self {
        Self { update }
    }
}

impl TemplateComponent for UpdateSettingsSummary<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::UpdateSettings
    }

    fn template(&self) -> TemplateName {
        TemplateName::UpdateSettings
    }

    fn scope(&self) -> Result<Scope> {
        Scope::new().bind("update", self.update)
    }
}
