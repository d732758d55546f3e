//! Collapsible summary of configuration groups.
//!
//! [`GroupVisibility`] is the only state the summary owns: the indices of the
//! groups currently expanded, kept sorted ascending without duplicates. It
//! lives as long as the owning view; [`GroupSummary`] borrows it together
//! with the host's groups for the duration of one interaction or render.

use console_core::prelude::*;
use console_core::{ConfigGroup, Scope};

use super::TemplateComponent;
use crate::registry::ComponentId;
use crate::template::TemplateName;

// ─────────────────────────────────────────────────────────────────────────────
// GroupVisibility
// ─────────────────────────────────────────────────────────────────────────────

/// Sorted set of expanded group indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupVisibility {
    visible: Vec<usize>,
}

impl GroupVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a host-supplied starting set, or start empty
    pub fn seeded(initial: Option<Vec<usize>>) -> Self {
        let mut visible = initial.unwrap_or_default();
        visible.sort_unstable();
        visible.dedup();
        Self { visible }
    }

    /// Collapse `index` if expanded, expand it otherwise
    pub fn toggle(&mut self, index: usize) {
        match self.visible.binary_search(&index) {
            Ok(pos) => {
                self.visible.remove(pos);
            }
            Err(pos) => self.visible.insert(pos, index),
        }
        trace!("Toggled group {}; visible: {:?}", index, self.visible);
    }

    /// Expand every index in `0..group_count`
    pub fn show_all(&mut self, group_count: usize) {
        self.visible = (0..group_count).collect();
    }

    pub fn hide_all(&mut self) {
        self.visible.clear();
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GroupSummary
// ─────────────────────────────────────────────────────────────────────────────

/// Group summary bound to the host's groups and the view's visibility state
#[derive(Debug)]
pub struct GroupSummary<'a> {
    groups: &'a [ConfigGroup],
    visibility: &'a mut GroupVisibility,
}

impl<'a> GroupSummary<'a> {
    pub fn bind(groups: &'a [ConfigGroup], visibility: &'a mut GroupVisibility) -> Self {
        Self { groups, visibility }
    }

    pub fn groups(&self) -> &[ConfigGroup] {
        self.groups
    }

    pub fn visible_groups(&self) -> &[usize] {
        self.visibility.visible()
    }

    pub fn toggle_visible_group(&mut self, index: usize) {
        self.visibility.toggle(index);
    }

    pub fn show_all_groups(&mut self) {
        self.visibility.show_all(self.groups.len());
    }

    pub fn hide_all_groups(&mut self) {
        self.visibility.hide_all();
    }
}

impl TemplateComponent for GroupSummary<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::GroupSummary
    }

    fn template(&self) -> TemplateName {
        TemplateName::GroupSummary
    }

    fn scope(&self) -> Result<Scope> {
        Scope::new()
            .bind("groups", self.groups)?
            .bind("visibleGroups", self.visibility.visible())
    }
}
