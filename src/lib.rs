//! win-java - idempotent Java configuration for Windows hosts
//!
//! Converges two pieces of host state:
//!
//! - the machine-wide `JAVA_HOME` environment variable, either to an explicit
//!   path or to the home of the JRE the registry marks as current;
//! - the presence of a certificate, by alias, in a Java keystore.
//!
//! Every operation reads actual state, compares it with the desired state and
//! mutates only on mismatch, reporting a [`ConvergenceResult`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): results, desired-state inputs, errors and
//!   the `RegistryReader`/`Shell` ports
//! - **Adapters** (`adapters`): winreg and PowerShell implementations of the
//!   ports, plus in-memory fakes
//! - **Service Layer** (`services`): the resolver and the convergers
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use win_java::adapters::{InMemoryRegistry, MockShell};
//! use win_java::domain::models::DesiredEnvironmentState;
//! use win_java::services::EnvironmentConverger;
//!
//! let registry = InMemoryRegistry::new();
//! let shell = MockShell::new().with_run_output(r"C:\jre7");
//! let converger = EnvironmentConverger::new(&registry, &shell, "set_java_home.ps1");
//!
//! let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\jre8"));
//! assert!(result.changed);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::models::{
    Config, ConvergenceResult, DesiredEnvironmentState, DesiredKeystoreEntry, EnvironmentEntry,
    StateEntry, StateFile,
};
pub use domain::ports::{Hive, RegistryReader, ScriptOutcome, Shell, ShellKind};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{EnvironmentConverger, JavaHomeResolver, KeystoreConverger, StateApplier};
