//! Compendium entity records

use serde_json::Value;

use crate::error::Result;
use crate::ident::generate_id;
use crate::template::{self, path};

/// One compendium entry: a template copy being filled in.
///
/// Records are built for a single source item, serialized to one line and
/// dropped. Keys keep the template's order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Value);

impl Record {
    /// Wrap a template copy.
    #[must_use]
    pub fn from_template(template: Value) -> Self {
        Self(template)
    }

    /// Set `name` and derive `_id` from it.
    pub fn set_identity(&mut self, name: &str) -> Result<()> {
        self.set("_id", Value::String(generate_id(name)))?;
        self.set("name", Value::String(name.to_string()))
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("_id").and_then(Value::as_str)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Value at a dotted path.
    #[must_use]
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        path::get(&self.0, dotted)
    }

    /// Mutable value at a dotted path.
    pub fn get_mut(&mut self, dotted: &str) -> Option<&mut Value> {
        path::get_mut(&mut self.0, dotted)
    }

    /// Set a dotted path, creating intermediate mappings.
    pub fn set(&mut self, dotted: &str, value: impl Into<Value>) -> Result<()> {
        path::set(&mut self.0, dotted, value.into())
    }

    /// Lay `overrides` over the record without removing any key.
    pub fn merge(&mut self, overrides: Value) -> Result<()> {
        template::merge_into(&mut self.0, overrides)
    }

    /// Force `{}` at every empty structural path.
    pub fn normalize(&mut self, empty_object_paths: &[&str]) {
        template::normalize(&mut self.0, empty_object_paths);
    }

    /// Serialize to a single JSON line (unicode and `/` unescaped).
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_identity() {
        let mut record = Record::from_template(json!({"_id": "", "name": "", "img": null}));
        record.set_identity("Warrior").unwrap();
        assert_eq!(record.name(), Some("Warrior"));
        assert_eq!(record.id(), Some(generate_id("Warrior").as_str()));
    }

    #[test]
    fn test_to_line_leaves_unicode_and_slashes() {
        let record = Record::from_template(json!({
            "name": "Fusil d'assaut - Défense",
            "img": "modules/knight-compendium/assets/weapons/fusil.webp"
        }));
        let line = record.to_line().unwrap();
        assert_eq!(
            line,
            r#"{"name":"Fusil d'assaut - Défense","img":"modules/knight-compendium/assets/weapons/fusil.webp"}"#
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_merge_and_normalize() {
        let mut record = Record::from_template(json!({"system": {"prix": 0, "listes": []}}));
        record.merge(json!({"system": {"prix": 12}})).unwrap();
        record.normalize(&["system.listes"]);
        assert_eq!(record.into_value(), json!({"system": {"prix": 12, "listes": {}}}));
    }
}
