//! Domain errors for host configuration operations.

use thiserror::Error;

use super::ports::Hive;

/// Errors raised by the capability ports and input validation.
///
/// None of these escape a converger: they are folded into a
/// [`ConvergenceResult`](super::models::ConvergenceResult) with
/// `succeeded = false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Registry value {hive}\\{key_path}\\{value_name} could not be read: {reason}")]
    RegistryRead {
        hive: Hive,
        key_path: String,
        value_name: String,
        reason: String,
    },

    #[error("Command `{command}` failed{}: {output}", format_exit_code(.exit_code))]
    ExternalCommand {
        command: String,
        exit_code: Option<i32>,
        output: String,
    },

    #[error("Failed to start {program}: {reason}")]
    CommandSpawn { program: String, reason: String },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

fn format_exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| " (terminated by signal)".to_string(), |c| format!(" with exit code {c}"))
}

impl DomainError {
    /// Build a registry error for the given value triple.
    pub fn registry_read(
        hive: Hive,
        key_path: impl Into<String>,
        value_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::RegistryRead {
            hive,
            key_path: key_path.into(),
            value_name: value_name.into(),
            reason: reason.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
