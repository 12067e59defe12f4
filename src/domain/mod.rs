//! Domain layer for win-java
//!
//! Holds the convergence result model, the desired-state inputs, the error
//! taxonomy and the capability ports the convergers are written against.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
