use serde_yaml::{Mapping, Value};

use crate::error::{MigrateError, Result};

/// Name a YAML node kind for error messages.
pub fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Look up the nested mapping stored under `key`.
///
/// An absent key is fine (`Ok(None)`); a key holding anything other than a
/// mapping is a shape error naming the dotted `path` and the kind found.
pub fn child_mapping<'a>(
    parent: &'a Mapping,
    key: &str,
    path: &str,
) -> Result<Option<&'a Mapping>> {
    match parent.get(key) {
        None => Ok(None),
        Some(Value::Mapping(child)) => Ok(Some(child)),
        Some(other) => Err(MigrateError::NotAMapping(path.to_string(), node_kind(other))),
    }
}

/// Copy `src_key` from `src` into `dst` under `dst_key` when present.
///
/// The value is cloned, so the destination owns its subtree outright.
pub fn copy_renamed(src: &Mapping, src_key: &str, dst: &mut Mapping, dst_key: &str) {
    if let Some(value) = src.get(src_key) {
        dst.insert(key(dst_key), value.clone());
    }
}

pub fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

pub fn empty_string() -> Value {
    Value::String(String::new())
}
