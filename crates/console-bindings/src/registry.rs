//! Component registry.
//!
//! Every component is described by a static [`ComponentDescriptor`]: its name,
//! where it may be used (element tag or class marker), its named inputs, how
//! it renders and whether it replaces its anchor element. Hosts look
//! components up by the name they find in markup.

use console_core::prelude::*;
use console_core::{Markup, Scope};

use crate::dom::{DomHost, NodeId};
use crate::template::TemplateName;

/// Every component known to the bindings layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    RoleLink,
    RoleEnvLink,
    JobLink,
    TaskLink,
    Breadcrumb,
    Error,
    TaskSandboxLink,
    TaskStatus,
    SchedulingDetail,
    GroupSummary,
    ConfigSummary,
    TimeDisplay,
    UpdateSettings,
    InstanceSummary,
}

impl ComponentId {
    pub fn descriptor(self) -> &'static ComponentDescriptor {
        &REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

/// Where a component may appear in host markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// As its own tag, e.g. `<group-summary>`
    Element,
    /// As a class token on another element, e.g. `<td class="job-link">`
    Class,
}

/// How a component produces its markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Markup generated in-process from the bound value
    Inline,
    /// Delegates to one external template
    Template(TemplateName),
    /// Builds markup imperatively against the DOM host
    Builder,
    /// Adds behaviour to its existing contents
    Behavior,
    /// Marks an element; no markup and no behaviour
    Marker,
}

/// A named input of an isolated component scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> InputSpec {
    InputSpec {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> InputSpec {
    InputSpec {
        name,
        required: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub id: ComponentId,
    pub name: &'static str,
    pub restrict: Restriction,
    /// Empty for components reading the enclosing context
    pub inputs: &'static [InputSpec],
    pub render: RenderStrategy,
    /// Replace the anchor element instead of filling it
    pub replace: bool,
}

impl ComponentDescriptor {
    pub fn template(&self) -> Option<TemplateName> {
        match self.render {
            RenderStrategy::Template(name) => Some(name),
            _ => None,
        }
    }

    pub fn has_isolated_scope(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Required inputs that `scope` does not bind
    pub fn missing_inputs(&self, scope: &Scope) -> Vec<&'static str> {
        self.inputs
            .iter()
            .filter(|input| input.required && !scope.contains(input.name))
            .map(|input| input.name)
            .collect()
    }
}

const fn describe(
    id: ComponentId,
    name: &'static str,
    restrict: Restriction,
    inputs: &'static [InputSpec],
    render: RenderStrategy,
    replace: bool,
) -> ComponentDescriptor {
    ComponentDescriptor {
        id,
        name,
        restrict,
        inputs,
        render,
        replace,
    }
}

const NO_INPUTS: &[InputSpec] = &[];
const GROUP_SUMMARY_INPUTS: &[InputSpec] = &[required("groups"), optional("visibleGroups")];
const CONFIG_SUMMARY_INPUTS: &[InputSpec] = &[required("group")];
const TIME_DISPLAY_INPUTS: &[InputSpec] = &[required("timestamp")];
const UPDATE_SETTINGS_INPUTS: &[InputSpec] = &[required("update")];
const INSTANCE_SUMMARY_INPUTS: &[InputSpec] =
    &[required("instances"), optional("size"), optional("stats")];

/// Descriptor table, indexed by `ComponentId as usize`
pub static REGISTRY: [ComponentDescriptor; 14] = [
    describe(
        ComponentId::RoleLink,
        "roleLink",
        Restriction::Class,
        NO_INPUTS,
        RenderStrategy::Inline,
        false,
    ),
    describe(
        ComponentId::RoleEnvLink,
        "roleEnvLink",
        Restriction::Class,
        NO_INPUTS,
        RenderStrategy::Inline,
        false,
    ),
    describe(
        ComponentId::JobLink,
        "jobLink",
        Restriction::Class,
        NO_INPUTS,
        RenderStrategy::Inline,
        false,
    ),
    describe(
        ComponentId::TaskLink,
        "taskLink",
        Restriction::Class,
        NO_INPUTS,
        RenderStrategy::Inline,
        false,
    ),
    describe(
        ComponentId::Breadcrumb,
        "breadcrumb",
        Restriction::Element,
        NO_INPUTS,
        RenderStrategy::Template(TemplateName::Breadcrumb),
        false,
    ),
    describe(
        ComponentId::Error,
        "error",
        Restriction::Element,
        NO_INPUTS,
        RenderStrategy::Template(TemplateName::Error),
        false,
    ),
    describe(
        ComponentId::TaskSandboxLink,
        "taskSandboxLink",
        Restriction::Element,
        NO_INPUTS,
        RenderStrategy::Template(TemplateName::TaskSandbox),
        false,
    ),
    describe(
        ComponentId::TaskStatus,
        "taskStatus",
        Restriction::Element,
        NO_INPUTS,
        RenderStrategy::Behavior,
        true,
    ),
    describe(
        ComponentId::SchedulingDetail,
        "schedulingDetail",
        Restriction::Class,
        NO_INPUTS,
        RenderStrategy::Marker,
        false,
    ),
    describe(
        ComponentId::GroupSummary,
        "groupSummary",
        Restriction::Element,
        GROUP_SUMMARY_INPUTS,
        RenderStrategy::Template(TemplateName::GroupSummary),
        true,
    ),
    describe(
        ComponentId::ConfigSummary,
        "configSummary",
        Restriction::Element,
        CONFIG_SUMMARY_INPUTS,
        RenderStrategy::Template(TemplateName::ConfigSummary),
        true,
    ),
    describe(
        ComponentId::TimeDisplay,
        "timeDisplay",
        Restriction::Element,
        TIME_DISPLAY_INPUTS,
        RenderStrategy::Template(TemplateName::TimeDisplay),
        false,
    ),
    describe(
        ComponentId::UpdateSettings,
        "updateSettings",
        Restriction::Element,
        UPDATE_SETTINGS_INPUTS,
        RenderStrategy::Template(TemplateName::UpdateSettings),
        false,
    ),
    describe(
        ComponentId::InstanceSummary,
        "instanceSummary",
        Restriction::Element,
        INSTANCE_SUMMARY_INPUTS,
        RenderStrategy::Builder,
        false,
    ),
];

/// Lookup over [`REGISTRY`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentRegistry;

impl ComponentRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> &'static [ComponentDescriptor] {
        &REGISTRY
    }

    /// Find the component a host would match for `name` used as `usage`.
    ///
    /// Accepts camelCase (`roleEnvLink`) and dashed forms (`role-env-link`,
    /// `data-role-env-link`, `x-role-env-link`).
    pub fn lookup(&self, name: &str, usage: Restriction) -> Option<&'static ComponentDescriptor> {
        let normalized = normalize_name(name);
        REGISTRY
            .iter()
            .find(|d| d.restrict == usage && d.name == normalized)
    }

    /// Like [`lookup`](Self::lookup) but an unknown name is an error
    pub fn require(&self, name: &str, usage: Restriction) -> Result<&'static ComponentDescriptor> {
        self.lookup(name, usage)
            .ok_or_else(|| Error::unknown_component(name))
    }
}

/// Place component output at `anchor`, honouring replace-in-place semantics
pub fn mount_markup(
    host: &mut dyn DomHost,
    anchor: NodeId,
    descriptor: &ComponentDescriptor,
    markup: Markup,
) -> Result<NodeId> {
    debug!(
        "Mounting {} at node {} (replace: {})",
        descriptor.name, anchor, descriptor.replace
    );
    if descriptor.replace {
        host.replace_with(anchor, markup)
    } else {
        host.append(anchor, markup)
    }
}

/// `data-role-env-link` -> `roleEnvLink`
pub fn normalize_name(name: &str) -> String {
    let trimmed = name
        .strip_prefix("data-")
        .or_else(|| name.strip_prefix("x-"))
        .unwrap_or(name);

    let mut out = String::with_capacity(trimmed.len());
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '-' || c == '_' || c == ':' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
