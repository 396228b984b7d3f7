//! Read-only accessors for generic cluster objects
//!
//! Objects fetched from the cluster arrive as untyped [`serde_json::Value`]
//! trees; these helpers read the identifying fields without imposing any
//! schema beyond `kind` and `metadata.name`.

use crate::errors::{ObjectError, Result};
use serde_json::Value;

/// Read the object's kind and name
///
/// Missing or non-string fields read as the empty string; this accessor
/// never fails.
pub fn obj_kind_name(obj: &Value) -> (String, String) {
    let kind = obj
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let name = obj
        .pointer("/metadata/name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    (kind, name)
}

/// Check that the object's name carries the expected prefix
///
/// Generated objects (machines, deployments) are named after the cluster
/// that owns them; a missing prefix means the naming convention broke.
pub fn validate_object_name_prefix(obj: &Value, prefix: &str) -> Result<()> {
    let (kind, name) = obj_kind_name(obj);

    if !name.starts_with(prefix) {
        return Err(ObjectError::PrefixMismatch {
            kind,
            name,
            prefix: prefix.to_string(),
        }
        .into());
    }

    Ok(())
}
