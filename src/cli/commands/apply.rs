//! Implementation of the `win-java apply` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use std::path::{Path, PathBuf};

use crate::adapters::registry::WindowsRegistry;
use crate::cli::commands::host_shell;
use crate::cli::display::{colorize_status, list_table};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, StateFile};
use crate::services::{BatchReport, StateApplier};

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// YAML state file listing java_home and ca_install entries
    pub file: PathBuf,
}

impl CommandOutput for BatchReport {
    fn to_human(&self) -> String {
        if self.results.is_empty() {
            return "No states to apply.".to_string();
        }

        let mut table = list_table(&["status", "subject", "message"]);
        for result in &self.results {
            table.add_row(vec![
                colorize_status(result.status_label()).to_string(),
                result.subject.clone(),
                result.message.clone(),
            ]);
        }

        format!(
            "{table}\n\n{} succeeded ({} changed), {} failed",
            style(self.results.len() - self.failed()).bold(),
            self.changed(),
            self.failed()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": self.all_succeeded(),
            "total": self.results.len(),
            "changed": self.changed(),
            "unchanged": self.unchanged(),
            "failed": self.failed(),
            "results": self.results,
        })
    }
}

/// Read and parse a state file.
pub fn load_state_file(path: &Path) -> Result<StateFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    StateFile::from_yaml(&source)
        .with_context(|| format!("Failed to parse state file {}", path.display()))
}

pub fn execute(args: ApplyArgs, config: &Config, json_mode: bool) -> Result<()> {
    let state = load_state_file(&args.file)?;
    tracing::info!(file = %args.file.display(), entries = state.states.len(), "applying state file");

    let applier = StateApplier::new(
        WindowsRegistry::new(),
        host_shell(config),
        config.scripts.set_java_home.clone(),
    );
    let report = applier.apply(&state);

    output(&report, json_mode);
    if !report.all_succeeded() {
        bail!(
            "{} of {} states failed",
            report.failed(),
            report.results.len()
        );
    }
    Ok(())
}
