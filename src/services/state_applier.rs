//! Applies a state file entry by entry and collects the results.

use serde::Serialize;
use std::path::PathBuf;

use crate::domain::models::{ConvergenceResult, DesiredEnvironmentState, StateEntry, StateFile};
use crate::domain::ports::{RegistryReader, Shell};
use crate::services::environment_converger::EnvironmentConverger;
use crate::services::keystore_converger::KeystoreConverger;

/// Results of one state-file run, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub results: Vec<ConvergenceResult>,
}

impl BatchReport {
    /// Entries that modified host state.
    pub fn changed(&self) -> usize {
        self.results.iter().filter(|r| r.changed).count()
    }

    /// Entries that reported `succeeded=false`.
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded).count()
    }

    /// Entries that succeeded without touching anything.
    pub fn unchanged(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.succeeded && !r.changed)
            .count()
    }

    /// True when no entry failed.
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }
}

/// Runs every entry of a [`StateFile`] in order. A failing entry does not
/// stop the run.
pub struct StateApplier<R, S> {
    registry: R,
    shell: S,
    set_java_home_script: PathBuf,
}

impl<R: RegistryReader, S: Shell> StateApplier<R, S> {
    /// `set_java_home_script` is passed to every `java_home` entry.
    pub fn new(registry: R, shell: S, set_java_home_script: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            shell,
            set_java_home_script: set_java_home_script.into(),
        }
    }

    /// Converge a single entry.
    pub fn apply_entry(&self, entry: &StateEntry) -> ConvergenceResult {
        match entry {
            StateEntry::JavaHome(env) => EnvironmentConverger::new(
                &self.registry,
                &self.shell,
                self.set_java_home_script.clone(),
            )
            .converge(&DesiredEnvironmentState::from(env.clone())),
            StateEntry::CaInstall(keystore) => {
                KeystoreConverger::new(&self.shell).converge(keystore)
            }
        }
    }

    /// Converge every entry in file order and collect the results.
    pub fn apply(&self, state: &StateFile) -> BatchReport {
        let results = state
            .states
            .iter()
            .map(|entry| self.apply_entry(entry))
            .collect::<Vec<_>>();

        let report = BatchReport { results };
        tracing::info!(
            total = report.results.len(),
            changed = report.changed(),
            failed = report.failed(),
            "state file applied"
        );
        report
    }
}
