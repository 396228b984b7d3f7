//! Status condition inspection for cluster objects
//!
//! Controllers report readiness through `status.conditions` entries shaped
//! like `metav1.Condition`. Test cases poll a fetched object through
//! [`validate_all_conditions_true`] until every condition reports `True`;
//! the retry loop itself belongs to the caller.

use crate::errors::{ConditionError, Result};
use crate::object::obj_kind_name;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The boolean-like state of a condition, matching the Kubernetes wire strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A typed view of one `status.conditions` entry
///
/// Extra wire fields (`lastTransitionTime`, `observedGeneration`, ...) are
/// ignored; `reason` and `message` default to empty when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: ConditionStatus,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Status: {}, Reason: {}, Message: {}",
            self.condition_type, self.status, self.reason, self.message
        )
    }
}

/// Extract the typed condition records from a generic object
///
/// Fails with [`ConditionError::MissingConditions`] when the object has no
/// `status.conditions` field, and with [`ConditionError::Conversion`] when
/// the field is not an array or any entry does not parse as a condition.
/// Records are returned in input order.
pub fn conditions_from_object(obj: &Value) -> Result<Vec<Condition>> {
    let (kind, name) = obj_kind_name(obj);

    let entries = obj
        .pointer("/status/conditions")
        .ok_or_else(|| ConditionError::MissingConditions {
            kind: kind.clone(),
            name: name.clone(),
        })?;

    let entries = entries.as_array().ok_or_else(|| ConditionError::Conversion {
        kind: kind.clone(),
        name: name.clone(),
        detail: format!(
            "expected status.conditions to be an array, got {}",
            value_kind(entries)
        ),
    })?;

    let mut conditions = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(ConditionError::Conversion {
                kind: kind.clone(),
                name: name.clone(),
                detail: format!(
                    "expected condition {} to be an object, got {}",
                    idx,
                    value_kind(entry)
                ),
            }
            .into());
        }

        let condition: Condition =
            serde_json::from_value(entry.clone()).map_err(|err| ConditionError::Conversion {
                kind: kind.clone(),
                name: name.clone(),
                detail: format!("condition {}: {}", idx, err),
            })?;

        conditions.push(condition);
    }

    Ok(conditions)
}

/// Check that every condition on the object reports status `True`
///
/// Offending conditions are collected into a single
/// [`ConditionError::NotReady`] listing one `Type/Status/Reason/Message`
/// description per condition, in reverse input order (the most recently
/// appended condition is reported first).
pub fn validate_all_conditions_true(obj: &Value) -> Result<()> {
    let (kind, name) = obj_kind_name(obj);
    let conditions = conditions_from_object(obj)?;

    let mut details: Vec<String> = conditions
        .iter()
        .filter(|c| c.status != ConditionStatus::True)
        .map(|c| c.to_string())
        .collect();
    details.reverse();

    if !details.is_empty() {
        return Err(ConditionError::NotReady {
            kind,
            name,
            details,
        }
        .into());
    }

    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
