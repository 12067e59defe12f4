//! CLI command implementations.

pub mod apply;
pub mod ca_install;
pub mod java_home;
pub mod resolve;

use anyhow::{bail, Result};

use crate::adapters::shell::PowerShell;
use crate::cli::display::colorize_status;
use crate::cli::output::CommandOutput;
use crate::domain::models::{Config, ConvergenceResult};

/// Shell adapter configured for this host.
pub(crate) fn host_shell(config: &Config) -> PowerShell {
    PowerShell::new(config.shell.powershell_program.clone())
}

/// Turn a failed result into a command error so the process exits non-zero.
pub(crate) fn ensure_succeeded(result: &ConvergenceResult) -> Result<()> {
    if !result.succeeded {
        bail!("{} did not converge", result.subject);
    }
    Ok(())
}

impl CommandOutput for ConvergenceResult {
    fn to_human(&self) -> String {
        let mut line = format!("[{}] {}", colorize_status(self.status_label()), self.message);
        if self.changed {
            line.push_str(&format!(
                "\n  old: {}\n  new: {}",
                self.previous_value.as_deref().unwrap_or(""),
                self.new_value.as_deref().unwrap_or("")
            ));
        }
        line
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output_shows_change() {
        let result = ConvergenceResult::changed(
            "JAVA_HOME",
            Some(r"C:\jre7".to_string()),
            Some(r"C:\jre8".to_string()),
            r"JAVA_HOME was set to C:\jre8",
        );
        let human = result.to_human();
        assert!(human.contains(r"JAVA_HOME was set to C:\jre8"));
        assert!(human.contains(r"old: C:\jre7"));
        assert!(human.contains(r"new: C:\jre8"));
    }

    #[test]
    fn test_failed_result_is_a_command_error() {
        let ok = ConvergenceResult::unchanged("corp_root", "corp_root already installed");
        assert!(ensure_succeeded(&ok).is_ok());

        let failed = ConvergenceResult::failed("corp_root", None, None, "problem importing corp_root");
        assert!(ensure_succeeded(&failed).is_err());
    }
}
