//! Task status component: a show/hide toggle for task details.

use console_core::prelude::*;
use console_core::Scope;

/// Local UI state of one task status element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStatus {
    show_details: bool,
}

impl TaskStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn toggle_show_details(&mut self) {
        self.show_details = !self.show_details;
        trace!("Task details visible: {}", self.show_details);
    }

    /// Exposes `showDetails` to the element's contents
    pub fn scope(&self) -> Result<Scope> {
        Scope::new().bind("showDetails", &self.show_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_hidden() {
        assert!(!TaskStatus::new().show_details());
    }

    #[test]
    fn test_toggle_flips() {
        let mut status = TaskStatus::new();
        status.toggle_show_details();
        assert!(status.show_details());
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut status = TaskStatus::new();
        status.toggle_show_details();
        status.toggle_show_details();
        assert_eq!(status, TaskStatus::new());
    }

    #[test]
    fn test_scope_exposes_flag() {
        let mut status = TaskStatus::new();
        status.toggle_show_details();
        let scope = status.scope().unwrap();
        assert_eq!(scope.get("showDetails"), Some(&serde_json::Value::Bool(true)));
    }
}
