//! Adapters implementing the domain ports.
//!
//! - `registry`: Windows registry (winreg) and an in-memory fake
//! - `shell`: PowerShell process runner and a recording mock

pub mod registry;
pub mod shell;

pub use registry::{InMemoryRegistry, WindowsRegistry};
pub use shell::{MockShell, PowerShell, ShellCall};
