//! PowerShell-backed implementation of the [`Shell`] port.
//!
//! Commands run through `powershell -NoLogo -NoProfile -NonInteractive`.
//! Scripts run with `-ExecutionPolicy Bypass -File` so unsigned local
//! scripts are allowed.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{ScriptOutcome, Shell, ShellKind};
use crate::infrastructure::logging::SecretScrubber;

const BASE_ARGS: [&str; 3] = ["-NoLogo", "-NoProfile", "-NonInteractive"];

fn hidden_command(program: impl AsRef<OsStr>) -> Command {
    #[allow(unused_mut)]
    let mut cmd = Command::new(program);
    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
    cmd
}

/// Quote `value` as a single-quoted PowerShell string literal.
///
/// Nothing inside single quotes is expanded; an embedded `'` is written
/// twice.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Wrap `command` so the process exit status is the native command's exit
/// code.
///
/// `-Command` alone exits 0 when a native program cannot be started, since
/// `$LASTEXITCODE` is then never set. With `$ErrorActionPreference = 'Stop'`
/// that case becomes a terminating error and the process exits 1.
pub fn forward_exit_code(command: &str) -> String {
    format!("$ErrorActionPreference = 'Stop'; {command}; exit $LASTEXITCODE")
}

/// Drop the line terminator PowerShell appends to its output. Any other
/// whitespace belongs to the value.
fn strip_line_terminator(output: &str) -> &str {
    output.trim_end_matches(['\r', '\n'])
}

/// Runs commands through a PowerShell executable.
#[derive(Debug, Clone)]
pub struct PowerShell {
    program: String,
    scrubber: SecretScrubber,
}

impl PowerShell {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            scrubber: SecretScrubber::new(),
        }
    }

    fn base_command(&self, kind: ShellKind) -> Command {
        match kind {
            ShellKind::PowerShell => {
                let mut cmd = hidden_command(&self.program);
                cmd.args(BASE_ARGS);
                cmd
            }
        }
    }

    fn command_line(&self, command: &str, kind: ShellKind) -> Command {
        let mut cmd = self.base_command(kind);
        cmd.arg("-Command").arg(command);
        cmd
    }

    fn script_command(&self, script_path: &Path, args: &[&str], kind: ShellKind) -> Command {
        let mut cmd = self.base_command(kind);
        cmd.args(["-ExecutionPolicy", "Bypass", "-File"])
            .arg(script_path)
            .args(args);
        cmd
    }

    fn retcode_command(&self, command: &str, kind: ShellKind) -> Command {
        self.command_line(&forward_exit_code(command), kind)
    }

    fn execute(&self, mut cmd: Command, redacted: &str) -> DomainResult<Output> {
        tracing::debug!(program = %self.program, command = %redacted, "running command");
        cmd.output().map_err(|e| {
            tracing::error!(program = %self.program, error = %e, "failed to spawn shell");
            DomainError::CommandSpawn {
                program: self.program.clone(),
                reason: e.to_string(),
            }
        })
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::new("powershell")
    }
}

fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut combined = stdout.trim_end().to_string();
    let stderr = stderr.trim_end();
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stderr);
    }
    combined
}

impl Shell for PowerShell {
    fn run(&self, command: &str, kind: ShellKind) -> DomainResult<String> {
        let redacted = self.scrubber.scrub_message(command);
        let output = self.execute(self.command_line(command, kind), &redacted)?;

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            Ok(strip_line_terminator(&stdout).to_string())
        } else {
            Err(DomainError::ExternalCommand {
                command: redacted,
                exit_code: output.status.code(),
                output: self.scrubber.scrub_message(&combined_output(&output)),
            })
        }
    }

    fn run_script(
        &self,
        script_path: &Path,
        args: &[&str],
        kind: ShellKind,
    ) -> DomainResult<ScriptOutcome> {
        let redacted = self.scrubber.scrub_message(&format!(
            "-File {} {}",
            script_path.display(),
            args.join(" ")
        ));
        let output = self.execute(self.script_command(script_path, args, kind), &redacted)?;

        Ok(ScriptOutcome {
            success: output.status.success(),
            exit_code: output.status.code(),
            output: self.scrubber.scrub_message(&combined_output(&output)),
        })
    }

    fn retcode(&self, command: &str, kind: ShellKind) -> DomainResult<i32> {
        let redacted = self.scrubber.scrub_message(command);
        let output = self.execute(self.retcode_command(command, kind), &redacted)?;

        let code = output.status.code().unwrap_or(-1);
        tracing::debug!(command = %redacted, exit_code = code, "command finished");
        Ok(code)
    }
}
