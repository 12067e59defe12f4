//! Shell port - run commands and scripts on the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::domain::errors::DomainResult;

/// Interpreter a command string is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    PowerShell,
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerShell => f.write_str("powershell"),
        }
    }
}

/// Result of running a script file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
    /// Captured stdout followed by stderr.
    pub output: String,
}

impl ScriptOutcome {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            output: output.into(),
        }
    }

    pub fn failed(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: Some(exit_code),
            output: output.into(),
        }
    }
}

/// Blocking command execution.
///
/// Every call runs to completion; there are no timeouts and no
/// cancellation.
pub trait Shell {
    /// Run `command` and return its captured stdout with trailing
    /// whitespace removed. A non-zero exit is `DomainError::ExternalCommand`.
    fn run(&self, command: &str, kind: ShellKind) -> DomainResult<String>;

    /// Run the script at `script_path` with `args`, each passed as one
    /// argument.
    fn run_script(&self, script_path: &Path, args: &[&str], kind: ShellKind)
        -> DomainResult<ScriptOutcome>;

    /// Run `command` and return only its exit code.
    fn retcode(&self, command: &str, kind: ShellKind) -> DomainResult<i32>;
}

impl<S: Shell + ?Sized> Shell for &S {
    fn run(&self, command: &str, kind: ShellKind) -> DomainResult<String> {
        (**self).run(command, kind)
    }

    fn run_script(
        &self,
        script_path: &Path,
        args: &[&str],
        kind: ShellKind,
    ) -> DomainResult<ScriptOutcome> {
        (**self).run_script(script_path, args, kind)
    }

    fn retcode(&self, command: &str, kind: ShellKind) -> DomainResult<i32> {
        (**self).retcode(command, kind)
    }
}
