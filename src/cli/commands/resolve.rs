//! Implementation of the `win-java resolve` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::adapters::registry::WindowsRegistry;
use crate::cli::output::{output, CommandOutput};
use crate::services::JavaHomeResolver;

#[derive(Args, Debug)]
pub struct ResolveArgs {}

#[derive(Debug, serde::Serialize)]
pub struct ResolveOutput {
    pub java_home: String,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        self.java_home.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(_args: ResolveArgs, json_mode: bool) -> Result<()> {
    let java_home = JavaHomeResolver::new(WindowsRegistry::new())
        .resolve()
        .context("Failed to resolve the current JRE home")?;

    output(&ResolveOutput { java_home }, json_mode);
    Ok(())
}
