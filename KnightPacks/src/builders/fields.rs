//! Typed access to API detail documents
//!
//! Keys may be dotted (`"category.name"`). An absent key or a value of the
//! wrong JSON type is an [`Error::MissingField`].

use serde_json::Value;

use crate::error::{Error, Result};
use crate::template::path;

/// Any value present at `key` (including `null`).
pub(crate) fn field<'a>(detail: &'a Value, key: &str) -> Result<&'a Value> {
    path::get(detail, key).ok_or_else(|| Error::missing(key))
}

pub(crate) fn str_field<'a>(detail: &'a Value, key: &str) -> Result<&'a str> {
    field(detail, key)?.as_str().ok_or_else(|| Error::missing(key))
}

/// String or `null`; an absent key counts as `null`.
pub(crate) fn opt_str<'a>(detail: &'a Value, key: &str) -> Result<Option<&'a str>> {
    match path::get(detail, key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(Error::missing(key)),
    }
}

/// Markdown text; `null` or absent reads as empty.
pub(crate) fn text<'a>(detail: &'a Value, key: &str) -> Result<&'a str> {
    Ok(opt_str(detail, key)?.unwrap_or_default())
}

pub(crate) fn int_field(detail: &Value, key: &str) -> Result<i64> {
    field(detail, key)?.as_i64().ok_or_else(|| Error::missing(key))
}

/// Numeric value copied as-is (integer or float).
pub(crate) fn number(detail: &Value, key: &str) -> Result<Value> {
    match field(detail, key)? {
        n @ Value::Number(_) => Ok(n.clone()),
        _ => Err(Error::missing(key)),
    }
}

pub(crate) fn array_field<'a>(detail: &'a Value, key: &str) -> Result<&'a [Value]> {
    field(detail, key)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::missing(key))
}

/// Array, with `null` or absent reading as empty.
pub(crate) fn opt_array<'a>(detail: &'a Value, key: &str) -> Result<&'a [Value]> {
    match path::get(detail, key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(Error::missing(key)),
    }
}

/// Summary id usable in a detail path (`"<endpoint>/<id>"`).
pub(crate) fn item_id(summary: &Value) -> Result<String> {
    match summary.get("id") {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(Error::missing("id")),
    }
}
