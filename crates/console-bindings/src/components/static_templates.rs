//! Breadcrumb, error panel and task sandbox link.
//!
//! These have no inputs of their own; they render their template against the
//! context their parent passes in.

use console_core::prelude::*;
use console_core::Scope;

use super::TemplateComponent;
use crate::registry::ComponentId;
use crate::template::TemplateName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticTemplate {
    Breadcrumb,
    ErrorPanel,
    TaskSandboxLink,
}

impl StaticTemplate {
    pub const ALL: [StaticTemplate; 3] = [
        StaticTemplate::Breadcrumb,
        StaticTemplate::ErrorPanel,
        StaticTemplate::TaskSandboxLink,
    ];

    pub fn component(self) -> ComponentId {
        match self {
            StaticTemplate::Breadcrumb => ComponentId::Breadcrumb,
            StaticTemplate::ErrorPanel => ComponentId::Error,
            StaticTemplate::TaskSandboxLink => ComponentId::TaskSandboxLink,
        }
    }

    pub fn template(self) -> TemplateName {
        match self {
            StaticTemplate::Breadcrumb => TemplateName::Breadcrumb,
            StaticTemplate::ErrorPanel => TemplateName::Error,
            StaticTemplate::TaskSandboxLink => TemplateName::TaskSandbox,
        }
    }

    /// Bind to the parent's context
    pub fn with_context(self, context: &Scope) -> StaticBinding<'_> {
        StaticBinding {
            kind: self,
            context,
        }
    }
}

/// A static template bound to its parent's context
#[derive(Debug, Clone, Copy)]
pub struct StaticBinding<'a> {
    kind: StaticTemplate,
    context: &'a Scope,
}

impl TemplateComponent for StaticBinding<'_> {
    fn id(&self) -> ComponentId {
        self.kind.component()
    }

    fn template(&self) -> TemplateName {
        self.kind.template()
    }

    fn scope(&self) -> Result<Scope> {
        Ok(self.context.clone())
    }
}
