//! Test-support helpers for controller end-to-end suites
//!
//! This crate contains the shared plumbing used by e2e test cases: running
//! external cluster tooling and capturing its output, loading images into a
//! local kind cluster, splitting command output into lines, and inspecting
//! the `status.conditions` of fetched cluster objects.
//!
//! Cluster objects are consumed as generic [`serde_json::Value`] trees; this
//! crate only reads them and never defines the object schema itself.

pub mod command;
pub mod conditions;
pub mod errors;
pub mod kind;
pub mod logging;
pub mod object;
pub mod text;

pub use command::{project_dir, CommandRunner};
pub use conditions::{conditions_from_object, validate_all_conditions_true, Condition, ConditionStatus};
pub use errors::{CommandError, ConditionError, E2eError, ObjectError, Result};
pub use object::{obj_kind_name, validate_object_name_prefix};
pub use text::non_empty_lines;
