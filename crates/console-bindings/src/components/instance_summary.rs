//! Instance status grid with a progress header.
//!
//! The grid is built once, when the component is mounted, from the instances
//! bound at that moment. Rebinding `instances` afterwards updates the
//! component's scope but not the rendered grid; the host has to mount a new
//! component to show the new list. Only the per-cell declarative attributes
//! (tooltips) are activated against the live scope, via [`DomHost::compile`].

use console_core::prelude::*;
use console_core::{Element, InstanceRecord, InstanceStats, Scope};
use serde::Deserialize;
use serde_json::Value;

use crate::dom::{DomHost, NodeId};
use crate::registry::ComponentId;

pub const TITLE_CAPTION: &str = "Instance Status";

/// Inputs of `<instance-summary instances="..." size="..." stats="...">`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstanceSummaryInputs {
    pub instances: Vec<InstanceRecord>,
    /// CSS size token appended to the grid's class list
    pub size: String,
    pub stats: InstanceStats,
}

impl InstanceSummaryInputs {
    /// Read the inputs from a bound scope.
    ///
    /// A missing or non-list `instances` fails this component only.
    pub fn from_scope(scope: &Scope) -> Result<Self> {
        let component = ComponentId::InstanceSummary.name();
        let missing = ComponentId::InstanceSummary
            .descriptor()
            .missing_inputs(scope);
        if let Some(name) = missing.first() {
            return Err(Error::missing_input(component, *name));
        }

        let instances = scope.get("instances").cloned().unwrap_or_default();
        if !instances.is_array() {
            return Err(Error::malformed_input(
                component,
                "instances must be an ordered list",
            ));
        }

        let stats = match scope.get("stats") {
            None | Some(Value::Null) => InstanceStats::default(),
            Some(stats) => serde_json::from_value(stats.clone())?,
        };

        Ok(Self {
            instances: serde_json::from_value(instances)?,
            size: size_token(scope.get("size")),
            stats,
        })
    }

    pub fn scope(&self) -> Result<Scope> {
        Scope::new()
            .bind("instances", &self.instances)?
            .bind("size", &self.size)?
            .bind("stats", &self.stats)
    }
}

/// Class token for the bound `size`; scalars other than strings are stringified
fn size_token(size: Option<&Value>) -> String {
    match size {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Accessible label of the cell at position `n`, e.g. `INSTANCE 3: RUNNING`
pub fn cell_label(n: usize, record: &InstanceRecord) -> String {
    format!("INSTANCE {}: {}", n, record.status_class.to_uppercase())
}

/// `<ul class="instance-grid {size}">` with one `<li>` per instance, in order
pub fn build_grid(instances: &[InstanceRecord], size: &str) -> Element {
    instances
        .iter()
        .enumerate()
        .fold(
            Element::new("ul").class("instance-grid").class(size),
            |grid, (n, record)| {
                grid.child(
                    Element::new("li")
                        .class(&record.status_class)
                        .attr("tooltip", cell_label(n, record))
                        .child(
                            Element::new("span")
                                .class("instance-id")
                                .text(n.to_string()),
                        ),
                )
            },
        )
}

/// Caption plus the `{updated} / {total} ({progress}%)` readout
pub fn build_title(stats: &InstanceStats) -> Element {
    Element::new("div")
        .class("instance-summary-title")
        .child(Element::new("span").class("instance-title").text(TITLE_CAPTION))
        .text(" ")
        .child(
            Element::new("span")
                .class("instance-progress")
                .text(stats.progress_label()),
        )
}

/// Nodes created by a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedGrid {
    pub anchor: NodeId,
    pub title: NodeId,
    pub grid: NodeId,
    /// Declarative bindings activated in the grid
    pub activated: usize,
}

/// Instance summary component
#[derive(Debug, Clone)]
pub struct InstanceSummary {
    inputs: InstanceSummaryInputs,
    mounted: Option<MountedGrid>,
}

impl InstanceSummary {
    pub fn new(inputs: InstanceSummaryInputs) -> Self {
        Self {
            inputs,
            mounted: None,
        }
    }

    pub fn inputs(&self) -> &InstanceSummaryInputs {
        &self.inputs
    }

    pub fn mounted(&self) -> Option<MountedGrid> {
        self.mounted
    }

    /// Build the title and grid into `anchor` and activate the grid's
    /// bindings.
    ///
    /// Runs once; later calls return the first mount untouched.
    pub fn mount(&mut self, host: &mut dyn DomHost, anchor: NodeId) -> Result<MountedGrid> {
        if let Some(mounted) = self.mounted {
            debug!("Instance summary already mounted at node {}", mounted.anchor);
            return Ok(mounted);
        }

        let grid_markup = build_grid(&self.inputs.instances, &self.inputs.size);
        let title_markup = build_title(&self.inputs.stats);

        let grid = host.append(anchor, grid_markup.into())?;
        let title = host.insert_before(anchor, title_markup.into(), grid)?;
        let activated = host.compile(grid, &self.inputs.scope()?)?;

        debug!(
            "Mounted instance summary: {} cell(s), {} binding(s) activated",
            self.inputs.instances.len(),
            activated
        );

        let mounted = MountedGrid {
            anchor,
            title,
            grid,
            activated,
        };
        self.mounted = Some(mounted);
        Ok(mounted)
    }

    /// Rebind the instance list. An already mounted grid is left as built.
    pub fn set_instances(&mut self, instances: Vec<InstanceRecord>) {
        if self.mounted.is_some() {
            debug!("Instances rebound after mount; grid keeps its snapshot");
        }
        self.inputs.instances = instances;
    }

    pub fn set_stats(&mut self, stats: InstanceStats) {
        self.inputs.stats = stats;
    }
}
