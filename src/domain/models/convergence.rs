//! Uniform result of every convergence operation.

use serde::{Deserialize, Serialize};

/// Outcome of comparing desired state with actual state and, on mismatch,
/// attempting to change it.
///
/// `changed` is only ever `true` when `succeeded` is `true`, and then
/// `previous_value` differs from `new_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConvergenceResult {
    /// What was converged (state name, alias, ...).
    pub subject: String,
    pub changed: bool,
    pub previous_value: Option<String>,
    pub new_value: Option<String>,
    pub succeeded: bool,
    /// Human-readable explanation.
    pub message: String,
}

impl ConvergenceResult {
    /// Actual state already matched; nothing was done.
    pub fn unchanged(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            changed: false,
            previous_value: None,
            new_value: None,
            succeeded: true,
            message: message.into(),
        }
    }

    /// A mutation was applied and reported success.
    pub fn changed(
        subject: impl Into<String>,
        previous_value: Option<String>,
        new_value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        debug_assert_ne!(previous_value, new_value);
        Self {
            subject: subject.into(),
            changed: true,
            previous_value,
            new_value,
            succeeded: true,
            message: message.into(),
        }
    }

    /// The operation failed. `previous_value`/`new_value` describe what was
    /// attempted, not what is now in place.
    pub fn failed(
        subject: impl Into<String>,
        previous_value: Option<String>,
        new_value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            changed: false,
            previous_value,
            new_value,
            succeeded: false,
            message: message.into(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        match (self.succeeded, self.changed) {
            (false, _) => "failed",
            (true, true) => "changed",
            (true, false) => "unchanged",
        }
    }
}
