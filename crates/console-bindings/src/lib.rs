//! console-bindings - Declarative view bindings for the scheduler console
//!
//! Named, parameterized components the host rendering framework places in
//! its pages, plus the collaborators they rely on:
//!
//! - [`registry`] - static table of component descriptors and name lookup
//! - [`components`] - links, template-backed summaries, the task status
//!   toggle, the group visibility controller and the instance grid builder
//! - [`template`] - template resolution by logical name
//! - [`dom`] - node insertion and binding activation
//! - [`config`] - `console.toml` loading

pub mod components;
pub mod config;
pub mod dom;
pub mod registry;
pub mod template;

// Re-export primary types
pub use components::{
    GroupSummary, GroupVisibility, InstanceSummary, InstanceSummaryInputs, LinkFormatter,
    LinkVariant, StaticTemplate, TaskStatus, TemplateComponent,
};
pub use config::Settings;
pub use dom::{DomHost, Document, NodeId};
pub use registry::{
    mount_markup, ComponentDescriptor, ComponentId, ComponentRegistry, Restriction,
    RenderStrategy,
};
pub use template::{
    FileTemplateResolver, StaticTemplateResolver, TemplateBinding, TemplateName,
    TemplateResolver,
};
