//! Dotted-path navigation over JSON trees
//!
//! `"system.slots.tete.value"` addresses nested mappings. Segments are plain
//! object keys; there is no array indexing (numbered entries such as
//! evolution tiers are stored as string keys).

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Split `"a.b.c"` into `(Some("a.b"), "c")`, `"a"` into `(None, "a")`.
pub(crate) fn split_parent(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, path),
    }
}

/// Value at `path`, if every segment exists.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, key| node.as_object()?.get(key))
}

/// Mutable value at `path`, if every segment exists.
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    path.split('.')
        .try_fold(root, |node, key| node.as_object_mut()?.get_mut(key))
}

/// Set `path` to `value`, creating missing (or `null`) intermediate mappings.
///
/// Fails with [`Error::TemplateConflict`] when an intermediate segment holds a
/// scalar or an array.
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let (parent, leaf) = split_parent(path);
    let map = match parent {
        Some(parent) => ensure_object(root, parent)?,
        None => as_object_or_conflict(root, path)?,
    };
    map.insert(leaf.to_string(), value);
    Ok(())
}

/// Walk `path`, creating mappings along the way, and return the final mapping.
pub fn ensure_object<'a>(root: &'a mut Value, path: &str) -> Result<&'a mut Map<String, Value>> {
    let mut node = root;
    let mut walked = String::new();

    for key in path.split('.') {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(key);

        let map = as_object_or_conflict(node, &walked)?;
        node = map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    as_object_or_conflict(node, path)
}

fn as_object_or_conflict<'a>(
    node: &'a mut Value,
    path: &str,
) -> Result<&'a mut Map<String, Value>> {
    if node.is_null() {
        *node = Value::Object(Map::new());
    }
    node.as_object_mut().ok_or_else(|| Error::TemplateConflict {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_parent() {
        assert_eq!(split_parent("a.b.c"), (Some("a.b"), "c"));
        assert_eq!(split_parent("a"), (None, "a"));
    }

    #[test]
    fn test_get_nested() {
        let v = json!({"system": {"slots": {"tete": {"value": 3}}}});
        assert_eq!(get(&v, "system.slots.tete.value"), Some(&json!(3)));
        assert_eq!(get(&v, "system.slots.torse"), None);
        assert_eq!(get(&v, "system.slots.tete.value.deeper"), None);
    }

    #[test]
    fn test_set_creates_intermediates() {
        let mut v = json!({"system": {"capacites": {"selected": null}}});
        set(&mut v, "system.capacites.selected.ghost.label", json!("Ghost")).unwrap();
        assert_eq!(
            v,
            json!({"system": {"capacites": {"selected": {"ghost": {"label": "Ghost"}}}}})
        );
    }

    #[test]
    fn test_set_through_scalar_conflicts() {
        let mut v = json!({"system": {"prix": 10}});
        let err = set(&mut v, "system.prix.value", json!(1)).unwrap_err();
        assert!(matches!(err, Error::TemplateConflict { ref path } if path == "system.prix"));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut v = json!({"a": {"b": 1}});
        *get_mut(&mut v, "a.b").unwrap() = json!(2);
        assert_eq!(v, json!({"a": {"b": 2}}));
    }
}
