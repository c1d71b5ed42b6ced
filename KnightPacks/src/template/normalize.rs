//! Placeholder normalization
//!
//! Foundry's schema validation tells an empty object apart from `null`, a
//! missing key or an empty array. Structural fields that may legitimately
//! be empty are declared per entity type and forced to `{}` before
//! serialization.

use serde_json::{Map, Value};

use super::path::{self, split_parent};

/// Whether a value counts as an empty placeholder.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Replace empty values at `paths` with `{}`.
///
/// A path whose parent mapping does not exist does not apply to this record
/// and is skipped. Idempotent.
pub fn normalize(record: &mut Value, paths: &[&str]) {
    for dotted in paths {
        let (parent, leaf) = split_parent(dotted);
        let parent = match parent {
            Some(parent) => path::get_mut(record, parent),
            None => Some(&mut *record),
        };
        let Some(Value::Object(map)) = parent else {
            continue;
        };

        if map.get(leaf).is_none_or(is_empty) {
            map.insert(leaf.to_string(), Value::Object(Map::new()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PATHS: &[&str] = &[
        "system.listes",
        "system.labels",
        "system.aspects.chair",
        "system.pnj.liste",
        "prototypeToken.flags",
    ];

    #[test]
    fn test_normalize_replaces_empty_values() {
        let mut record = json!({
            "system": {
                "listes": [],
                "labels": null,
                "aspects": {"chair": {"value": 2}},
            }
        });
        normalize(&mut record, PATHS);

        assert_eq!(record["system"]["listes"], json!({}));
        assert_eq!(record["system"]["labels"], json!({}));
        // Non-empty values are kept
        assert_eq!(record["system"]["aspects"]["chair"], json!({"value": 2}));
    }

    #[test]
    fn test_normalize_fills_absent_leaf_when_parent_exists() {
        let mut record = json!({"system": {}, "prototypeToken": {"name": "X"}});
        normalize(&mut record, &["system.listes", "prototypeToken.flags"]);
        assert_eq!(record["system"]["listes"], json!({}));
        assert_eq!(record["prototypeToken"]["flags"], json!({}));
    }

    #[test]
    fn test_normalize_skips_missing_parent() {
        let mut record = json!({"system": {"prix": 1}});
        normalize(&mut record, &["system.pnj.liste", "prototypeToken.flags"]);
        assert_eq!(record, json!({"system": {"prix": 1}}));
    }

    #[test]
    fn test_normalize_keeps_zero_and_false() {
        let mut record = json!({"system": {"a": 0, "b": false, "c": ""}});
        normalize(&mut record, &["system.a", "system.b", "system.c"]);
        assert_eq!(record, json!({"system": {"a": 0, "b": false, "c": ""}}));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let original = json!({
            "system": {"listes": [], "labels": {}, "aspects": {"chair": null}, "pnj": {"liste": [1]}}
        });
        let mut once = original.clone();
        normalize(&mut once, PATHS);
        let mut twice = once.clone();
        normalize(&mut twice, PATHS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_top_level_path() {
        let mut record = json!({"flags": []});
        normalize(&mut record, &["flags"]);
        assert_eq!(record, json!({"flags": {}}));
    }
}
