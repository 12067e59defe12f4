//! Registry adapters.

pub mod memory;
pub mod windows;

pub use memory::InMemoryRegistry;
pub use windows::WindowsRegistry;
