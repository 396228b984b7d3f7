//! Error types and handling
//!
//! Domain-specific error enums for each helper area (command execution,
//! condition inspection, object validation), wrapped in the crate-level
//! [`E2eError`] for unified handling in test code.

use thiserror::Error;

/// External command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command ran but exited non-zero
    #[error("{command} failed with exit code {code}: {stderr}")]
    ExitStatus {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Command could not be started at all
    #[error("{command} failed to run")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Working directory resolution failed
    #[error("failed to resolve project directory")]
    ProjectDir(#[from] std::io::Error),
}

/// Status condition inspection errors
#[derive(Error, Debug)]
pub enum ConditionError {
    /// Object has no `status.conditions` field
    #[error("no status conditions found for {kind}: {name}")]
    MissingConditions { kind: String, name: String },

    /// A conditions entry could not be interpreted as a condition record
    #[error("failed to convert status conditions for {kind}: {name}: {detail}")]
    Conversion {
        kind: String,
        name: String,
        detail: String,
    },

    /// One or more conditions report a status other than "True"
    #[error("{kind} {name} is not ready with conditions:\n{}", details.join("\n"))]
    NotReady {
        kind: String,
        name: String,
        details: Vec<String>,
    },
}

/// Object metadata validation errors
#[derive(Error, Debug)]
pub enum ObjectError {
    /// Object name lacks the expected prefix
    #[error("object {kind} {name} does not have cluster name prefix: {prefix}")]
    PrefixMismatch {
        kind: String,
        name: String,
        prefix: String,
    },
}

/// Main error type wrapping all domain errors
#[derive(Error, Debug)]
pub enum E2eError {
    /// Command execution errors
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Condition inspection errors
    #[error("condition error: {0}")]
    Condition(#[from] ConditionError),

    /// Object validation errors
    #[error("object error: {0}")]
    Object(#[from] ObjectError),
}

/// Result type alias using E2eError
pub type Result<T> = std::result::Result<T, E2eError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_display() {
        let error = CommandError::ExitStatus {
            command: "kind load docker-image img".to_string(),
            code: 2,
            stderr: "boom".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "kind load docker-image img failed with exit code 2: boom"
        );
    }

    #[test]
    fn test_not_ready_display_joins_details() {
        let error = ConditionError::NotReady {
            kind: "Cluster".to_string(),
            name: "demo".to_string(),
            details: vec![
                "Type: B, Status: False, Reason: , Message: ".to_string(),
                "Type: A, Status: Unknown, Reason: , Message: ".to_string(),
            ],
        };
        let text = format!("{}", error);
        assert!(text.starts_with("Cluster demo is not ready with conditions:\n"));
        assert!(text.contains("Type: B"));
        assert!(text.contains("Type: A"));
    }

    #[test]
    fn test_error_conversion_to_e2e_error() {
        let error: E2eError = ObjectError::PrefixMismatch {
            kind: "Machine".to_string(),
            name: "other-0".to_string(),
            prefix: "demo".to_string(),
        }
        .into();
        assert!(matches!(error, E2eError::Object(_)));
        assert!(format!("{}", error).contains("does not have cluster name prefix: demo"));
    }
}
