//! Service layer
//!
//! The convergers compare desired host state with actual state and change
//! it only on mismatch:
//! - `JavaHomeResolver`: current JRE home from the registry
//! - `EnvironmentConverger`: machine-wide `JAVA_HOME`
//! - `KeystoreConverger`: certificate aliases in a Java keystore
//! - `StateApplier`: runs a whole state file

pub mod environment_converger;
pub mod java_home_resolver;
pub mod keystore_converger;
pub mod keytool;
pub mod state_applier;

pub use environment_converger::{EnvironmentConverger, MACHINE_JAVA_HOME_QUERY};
pub use java_home_resolver::{JavaHomeResolver, JRE_REGISTRY_KEY};
pub use keystore_converger::{AliasLookup, KeystoreConverger};
pub use keytool::{default_keystore, Keytool};
pub use state_applier::{BatchReport, StateApplier};
