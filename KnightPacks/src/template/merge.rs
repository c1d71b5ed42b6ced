//! Template merge
//!
//! Overrides are laid over a skeleton key by key. Mappings merge
//! recursively, everything else replaces the template leaf. A skeleton key
//! is never removed: replacing a non-empty template mapping with a scalar,
//! an array or `null` is a [`Error::TemplateConflict`].

use serde_json::Value;

use crate::error::{Error, Result};

/// Merge `overrides` into a copy of `template`.
pub fn merge(template: &Value, overrides: Value) -> Result<Value> {
    let mut merged = template.clone();
    merge_into(&mut merged, overrides)?;
    Ok(merged)
}

/// Merge `overrides` into `target` in place.
pub fn merge_into(target: &mut Value, overrides: Value) -> Result<()> {
    merge_at(target, overrides, "")
}

fn merge_at(target: &mut Value, overrides: Value, path: &str) -> Result<()> {
    match (target, overrides) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match base.get_mut(&key) {
                    Some(existing) => merge_at(existing, value, &child_path)?,
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Ok(())
        }
        (Value::Object(base), _) if !base.is_empty() => Err(Error::TemplateConflict {
            path: if path.is_empty() { ".".to_string() } else { path.to_string() },
        }),
        (slot, value) => {
            *slot = value;
            Ok(())
        }
    }
}
