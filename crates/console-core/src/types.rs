//! Domain types supplied by the host page to the bindings.
//!
//! All of these are owned by the host; components only read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Links
// ─────────────────────────────────────────────────────────────────────────────

/// A navigable scheduler entity: a formatted value plus the role and
/// environment taken from the enclosing data row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTarget {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl LinkTarget {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            role: None,
            environment: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Instances
// ─────────────────────────────────────────────────────────────────────────────

/// One scheduled task instance as shown in the instance grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRecord {
    /// Status category, also used as the cell's CSS class
    #[serde(alias = "className")]
    pub status_class: String,
}

impl InstanceRecord {
    pub fn new(status_class: impl Into<String>) -> Self {
        Self {
            status_class: status_class.into(),
        }
    }
}

/// Aggregate rollout progress. `progress` is a percentage computed by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceStats {
    pub instances_updated_so_far: u32,
    pub total_instances_to_be_updated: u32,
    pub progress: f64,
}

impl InstanceStats {
    pub fn new(updated: u32, total: u32, progress: f64) -> Self {
        Self {
            instances_updated_so_far: updated,
            total_instances_to_be_updated: total,
            progress,
        }
    }

    /// Progress readout, e.g. `1 / 2 (50%)`
    pub fn progress_label(&self) -> String {
        format!(
            "{} / {} ({}%)",
            self.instances_updated_so_far, self.total_instances_to_be_updated, self.progress
        )
    }
}

/// Inclusive range of instance ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRange {
    pub first: u32,
    pub last: u32,
}

impl InstanceRange {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Summaries
// ─────────────────────────────────────────────────────────────────────────────

/// A set of instances sharing one task configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGroup {
    #[serde(default)]
    pub instances: Vec<InstanceRange>,
    /// Task configuration, opaque to the bindings
    #[serde(default)]
    pub config: serde_json::Value,
}

impl ConfigGroup {
    pub fn new(instances: Vec<InstanceRange>) -> Self {
        Self {
            instances,
            config: serde_json::Value::Null,
        }
    }
}

/// Milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    /// `None` when outside chrono's representable range
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

/// Settings of a job update (rolling deploy)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSettings {
    pub update_group_size: u32,
    pub max_per_instance_failures: u32,
    pub max_failed_instances: u32,
    pub min_wait_in_instance_running_ms: u64,
    pub rollback_on_failure: bool,
    pub wait_for_batch_completion: bool,
    pub block_if_no_pulses_after_ms: Option<u64>,
    pub update_only_these_instances: Vec<InstanceRange>,
}
