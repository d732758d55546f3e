//! Data scope handed to templates and to binding activation.
//!
//! Parents build a [`Scope`] explicitly and pass it down; nothing is inherited
//! implicitly from an enclosing view.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Named values a template or compiled subtree reads from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    values: Map<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a serializable value under `name`, replacing any previous binding
    pub fn bind<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Result<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn insert<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
        self.values
            .insert(name.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

impl From<Map<String, Value>> for Scope {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_replaces_value() {
        let scope = Scope::new()
            .bind("role", "www-data")
            .unwrap()
            .bind("role", "mesos")
            .unwrap();
        assert_eq!(scope.get("role"), Some(&json!("mesos")));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_missing_name_is_none() {
        let scope = Scope::new();
        assert!(scope.get("error").is_none());
        assert!(scope.is_empty());
    }

    #[test]
    fn test_from_json_object() {
        let value = json!({"role": "r1", "environment": "prod"});
        let scope = match value {
            Value::Object(map) => Scope::from(map),
            _ => unreachable!(),
        };
        let mut names: Vec<_> = scope.names().collect();
        names.sort();
        assert_eq!(names, vec!["environment", "role"]);
        assert!(scope.contains("environment"));
    }
}
