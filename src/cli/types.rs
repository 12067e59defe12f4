//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::apply::ApplyArgs;
use super::commands::ca_install::CaInstallArgs;
use super::commands::java_home::JavaHomeArgs;
use super::commands::resolve::ResolveArgs;

#[derive(Parser, Debug)]
#[command(name = "win-java")]
#[command(about = "Idempotent JAVA_HOME and Java keystore configuration for Windows", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .win-java/config.yaml and .win-java/local.yaml)
    #[arg(long, global = true, env = "WIN_JAVA_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the home directory of the JRE the registry marks as current
    Resolve(ResolveArgs),

    /// Set the machine-wide JAVA_HOME if it differs from the desired value
    JavaHome(JavaHomeArgs),

    /// Import a certificate into a Java keystore unless its alias is present
    CaInstall(CaInstallArgs),

    /// Apply every entry of a YAML state file
    Apply(ApplyArgs),
}
