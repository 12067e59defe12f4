//! Shell adapters.

pub mod mock;
pub mod powershell;

pub use mock::{MockShell, ShellCall};
pub use powershell::{quote, PowerShell};
