//! Port trait definitions (Hexagonal Architecture)
//!
//! The convergers reach host state only through these traits:
//! - RegistryReader: read a string value from the Windows registry
//! - Shell: run commands and scripts, capturing output or exit codes
//!
//! Adapters in `crate::adapters` implement them for the real host and for
//! tests.

pub mod registry;
pub mod shell;

pub use registry::{Hive, RegistryReader};
pub use shell::{ScriptOutcome, Shell, ShellKind};
