//! Preview harness - render one component from a JSON fixture
//!
//! The fixture is the data the host page would supply: for link and static
//! template components it is the parent context, for components with an
//! isolated scope it holds their named inputs. Output is one JSON object per
//! render so scripts can inspect it.
//!
//! # Example Output
//!
//! ```json
//! {"kind":"markup","component":"jobLink","html":"<a href=\"/scheduler/r1/e1/jobA\">jobA</a>"}
//! {"kind":"template","component":"timeDisplay","template":"/timeDisplay.html","markup":"...","scope":{"timestamp":0}}
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use console_bindings::components::{
    ConfigSummary, GroupSummary, GroupVisibility, InstanceSummary, InstanceSummaryInputs,
    LinkFormatter, LinkVariant, StaticTemplate, TaskStatus, TemplateComponent, TimeDisplay,
    UpdateSettingsSummary,
};
use console_bindings::{
    ComponentDescriptor, ComponentId, ComponentRegistry, Document, Restriction, Settings,
    TemplateBinding, TemplateResolver,
};
use console_core::prelude::*;
use console_core::{ConfigGroup, Element, LinkTarget, Markup, Scope, Timestamp, UpdateSettings};

/// Result of rendering one component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewOutput {
    /// Markup built in-process
    Markup { component: String, html: String },

    /// A resolved template and the scope it renders against
    Template {
        component: String,
        template: String,
        markup: String,
        scope: Value,
    },

    /// Behaviour-only component: the scope it exposes to its contents
    Behavior { component: String, scope: Value },

    /// Marker with nothing to render
    Marker { component: String },

    /// Component failed; siblings are unaffected
    Error {
        component: String,
        message: String,
        html: String,
    },
}

impl PreviewOutput {
    fn template(component: &ComponentDescriptor, binding: TemplateBinding) -> Self {
        PreviewOutput::Template {
            component: component.name.to_string(),
            template: binding.template.url(),
            markup: binding.markup,
            scope: binding.scope.into_value(),
        }
    }

    /// Write as a single JSON line
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Render the component a host would find under `name` (tag or class form)
pub fn render_component(
    name: &str,
    fixture: &Scope,
    settings: &Settings,
    resolver: &dyn TemplateResolver,
) -> Result<PreviewOutput> {
    let registry = ComponentRegistry::new();
    let descriptor = registry
        .lookup(name, Restriction::Element)
        .or_else(|| registry.lookup(name, Restriction::Class))
        .ok_or_else(|| Error::unknown_component(name))?;

    let missing = descriptor.missing_inputs(fixture);
    if !missing.is_empty() && descriptor.id != ComponentId::InstanceSummary {
        warn!(
            "{} rendered without input(s) {:?}; view will be incomplete",
            descriptor.name, missing
        );
    }

    let component = descriptor.name.to_string();
    let output = match descriptor.id {
        ComponentId::RoleLink
        | ComponentId::RoleEnvLink
        | ComponentId::JobLink
        | ComponentId::TaskLink => {
            let variant = LinkVariant::from_component(descriptor.id)
                .ok_or_else(|| Error::unknown_component(name))?;
            let target: LinkTarget = serde_json::from_value(fixture.clone().into_value())?;
            let anchor: Markup = LinkFormatter::new(settings.links.clone())
                .render(variant, &target)
                .into();
            PreviewOutput::Markup {
                component,
                html: anchor.to_html(),
            }
        }
        ComponentId::Breadcrumb | ComponentId::Error | ComponentId::TaskSandboxLink => {
            let kind = StaticTemplate::ALL
                .into_iter()
                .find(|k| k.component() == descriptor.id)
                .ok_or_else(|| Error::unknown_component(name))?;
            let binding = kind.with_context(fixture).render(resolver)?;
            PreviewOutput::template(descriptor, binding)
        }
        ComponentId::TaskStatus => PreviewOutput::Behavior {
            component,
            scope: TaskStatus::new().scope()?.into_value(),
        },
        ComponentId::SchedulingDetail => PreviewOutput::Marker { component },
        ComponentId::GroupSummary => {
            let groups: Vec<ConfigGroup> = input_or_default(fixture, "groups")?;
            let initial: Option<Vec<usize>> = input_or_default(fixture, "visibleGroups")?;
            let mut visibility = GroupVisibility::seeded(initial);
            let binding = GroupSummary::bind(&groups, &mut visibility).render(resolver)?;
            PreviewOutput::template(descriptor, binding)
        }
        ComponentId::ConfigSummary => {
            let group: ConfigGroup = input_or_default(fixture, "group")?;
            let binding = ConfigSummary::new(&group).render(resolver)?;
            PreviewOutput::template(descriptor, binding)
        }
        ComponentId::TimeDisplay => {
            let timestamp: Timestamp = input_or_default(fixture, "timestamp")?;
            let binding = TimeDisplay::new(timestamp).render(resolver)?;
            PreviewOutput::template(descriptor, binding)
        }
        ComponentId::UpdateSettings => {
            let update: UpdateSettings = input_or_default(fixture, "update")?;
            let binding = UpdateSettingsSummary::new(&update).render(resolver)?;
            PreviewOutput::template(descriptor, binding)
        }
        ComponentId::InstanceSummary => {
            let inputs = InstanceSummaryInputs::from_scope(fixture)?;
            let mut document = Document::default();
            let anchor = document.create_anchor("instance-summary");
            InstanceSummary::new(inputs).mount(&mut document, anchor)?;
            PreviewOutput::Markup {
                component,
                html: document.html(anchor),
            }
        }
    };

    debug!("Rendered preview of {}", descriptor.name);
    Ok(output)
}

/// Like [`render_component`], but a recoverable failure becomes an error
/// placeholder instead of aborting the page
pub fn render_or_placeholder(
    name: &str,
    fixture: &Scope,
    settings: &Settings,
    resolver: &dyn TemplateResolver,
) -> Result<PreviewOutput> {
    match render_component(name, fixture, settings, resolver) {
        Err(e) if e.is_recoverable() => {
            warn!("Component {} failed to render: {}", name, e);
            let message = e.to_string();
            let html = Markup::from(placeholder(name, &message)).to_html();
            Ok(PreviewOutput::Error {
                component: name.to_string(),
                message,
                html,
            })
        }
        other => other,
    }
}

/// Placeholder element a host page shows in place of a failed component
pub fn placeholder(component: &str, message: &str) -> Element {
    Element::new("div")
        .class("component-error")
        .attr("data-component", component)
        .text(message)
}

/// Typed input from the fixture; absent or null inputs fall back to the default
fn input_or_default<T: DeserializeOwned + Default>(fixture: &Scope, name: &str) -> Result<T> {
    match fixture.get(name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value::<T>(value.clone())
            .with_context(|| format!("decoding input '{}'", name)),
    }
}
