//! Domain models for win-java.

pub mod config;
pub mod convergence;
pub mod desired_state;

pub use config::{Config, KeystoreConfig, LoggingConfig, ScriptsConfig, ShellConfig};
pub use convergence::ConvergenceResult;
pub use desired_state::{
    DesiredEnvironmentState, DesiredKeystoreEntry, EnvironmentEntry, JavaHomeTarget, StateEntry,
    StateFile, DEFAULT_STOREPASS,
};
