//! Implementation of the `win-java java-home` command.

use anyhow::Result;
use clap::Args;

use crate::adapters::registry::WindowsRegistry;
use crate::cli::commands::{ensure_succeeded, host_shell};
use crate::cli::output::output;
use crate::domain::models::{Config, DesiredEnvironmentState, EnvironmentEntry};
use crate::services::EnvironmentConverger;

#[derive(Args, Debug)]
pub struct JavaHomeArgs {
    /// Desired JAVA_HOME (only labels the run with --set-to-current-version)
    #[arg(required_unless_present = "set_to_current_version")]
    pub name: Option<String>,

    /// Use the home of the JRE the registry marks as current
    #[arg(long)]
    pub set_to_current_version: bool,
}

impl From<JavaHomeArgs> for EnvironmentEntry {
    fn from(args: JavaHomeArgs) -> Self {
        Self {
            name: args.name.unwrap_or_else(|| "JAVA_HOME".to_string()),
            set_to_current_version: args.set_to_current_version,
        }
    }
}

pub fn execute(args: JavaHomeArgs, config: &Config, json_mode: bool) -> Result<()> {
    let desired = DesiredEnvironmentState::from(EnvironmentEntry::from(args));
    let converger = EnvironmentConverger::new(
        WindowsRegistry::new(),
        host_shell(config),
        config.scripts.set_java_home.clone(),
    );

    let result = converger.converge(&desired);
    output(&result, json_mode);
    ensure_succeeded(&result)
}
