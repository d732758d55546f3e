//! Named view components.
//!
//! Template-backed components implement [`TemplateComponent`]: they build an
//! isolated [`Scope`] from their typed inputs (or take the parent's context
//! explicitly) and hand it, with their resolved template, to the host.

pub mod group_summary;
pub mod instance_summary;
pub mod links;
pub mod static_templates;
pub mod summaries;
pub mod task_status;

use console_core::prelude::*;
use console_core::Scope;

use crate::registry::ComponentId;
use crate::template::{bind_template, TemplateBinding, TemplateName, TemplateResolver};

pub use group_summary::{GroupSummary, GroupVisibility};
pub use instance_summary::{
    build_grid, build_title, cell_label, InstanceSummary, InstanceSummaryInputs, MountedGrid,
};
pub use links::{LinkFormatter, LinkVariant};
pub use static_templates::{StaticBinding, StaticTemplate};
pub use summaries::{ConfigSummary, TimeDisplay, UpdateSettingsSummary};
pub use task_status::TaskStatus;

/// A component that renders by delegating to one external template
pub trait TemplateComponent {
    fn id(&self) -> ComponentId;

    fn template(&self) -> TemplateName;

    /// Data the template is rendered against
    fn scope(&self) -> Result<Scope>;

    /// Resolve the template and pair it with [`scope`](Self::scope).
    ///
    /// Resolution failures are returned unchanged for the host to display.
    fn render(&self, resolver: &dyn TemplateResolver) -> Result<TemplateBinding> {
        let scope = self.scope()?;
        debug!("Rendering {} with {} bound name(s)", self.id().name(), scope.len());
        bind_template(resolver, self.template(), scope)
    }
}
