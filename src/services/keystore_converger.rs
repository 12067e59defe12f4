//! Ensures a certificate is present, by alias, in a Java keystore.
//!
//! Only alias presence is checked. If the keystore already holds a
//! *different* certificate under the same alias, the entry is reported as
//! already installed and left alone.

use crate::domain::models::{ConvergenceResult, DesiredKeystoreEntry};
use crate::domain::ports::{Shell, ShellKind};
use crate::services::environment_converger::query_machine_java_home;
use crate::services::keytool::{default_keystore, Keytool};

/// Result of the alias lookup.
///
/// A failed lookup cannot be told apart from a missing alias: wrong
/// password, unreadable keystore and a missing keytool all land in
/// `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasLookup {
    /// `keytool -list` exited 0.
    Present,
    /// Any other outcome. `exit_code` is `None` when the lookup never ran.
    Absent { exit_code: Option<i32> },
}

/// Imports certificates with `keytool` when their alias is missing.
pub struct KeystoreConverger<S> {
    shell: S,
}

impl<S: Shell> KeystoreConverger<S> {
    /// Build a converger that reaches keytool through `shell`.
    pub const fn new(shell: S) -> Self {
        Self { shell }
    }

    fn lookup(&self, keytool: &Keytool<'_>, alias: &str) -> AliasLookup {
        match self
            .shell
            .retcode(&keytool.list_alias(alias), ShellKind::PowerShell)
        {
            Ok(0) => AliasLookup::Present,
            Ok(code) => AliasLookup::Absent {
                exit_code: Some(code),
            },
            Err(e) => {
                tracing::debug!(error = %e, "alias lookup could not run");
                AliasLookup::Absent { exit_code: None }
            }
        }
    }

    /// Import `entry.certificate` unless `entry.alias` is already in the keystore.
    #[tracing::instrument(skip_all, fields(alias = %entry.alias))]
    pub fn converge(&self, entry: &DesiredKeystoreEntry) -> ConvergenceResult {
        let alias = entry.alias.as_str();

        if let Err(e) = entry.validate() {
            return ConvergenceResult::failed(alias, None, None, e.to_string());
        }

        let java_home = match &entry.java_home {
            Some(home) => home.clone(),
            None => match query_machine_java_home(&self.shell) {
                Ok(home) if !home.trim().is_empty() => home,
                Ok(_) => {
                    return ConvergenceResult::failed(
                        alias,
                        None,
                        None,
                        format!("no java_home given for {alias} and JAVA_HOME is not set"),
                    );
                }
                Err(e) => {
                    return ConvergenceResult::failed(
                        alias,
                        None,
                        None,
                        format!("no java_home given for {alias} and JAVA_HOME could not be read: {e}"),
                    );
                }
            },
        };

        let keystore = entry
            .keystore
            .clone()
            .unwrap_or_else(|| default_keystore(&java_home));
        let keytool = Keytool::new(&java_home, &keystore, &entry.storepass);

        match self.lookup(&keytool, alias) {
            AliasLookup::Present => {
                tracing::info!(keystore = %keystore, "certificate already installed");
                return ConvergenceResult::unchanged(alias, format!("{alias} already installed"));
            }
            AliasLookup::Absent { exit_code } => {
                tracing::info!(keystore = %keystore, lookup_exit_code = ?exit_code, "alias not found, importing");
            }
        }

        let import = self.shell.retcode(
            &keytool.import_certificate(alias, &entry.certificate),
            ShellKind::PowerShell,
        );
        match import {
            Ok(0) => ConvergenceResult::changed(
                alias,
                None,
                Some(alias.to_string()),
                format!("added {alias} to java certs"),
            ),
            Ok(code) => {
                tracing::warn!(exit_code = code, "keytool import failed");
                ConvergenceResult::failed(
                    alias,
                    None,
                    Some(alias.to_string()),
                    format!("problem importing {alias}: keytool exited with code {code}"),
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "keytool import could not run");
                ConvergenceResult::failed(
                    alias,
                    None,
                    Some(alias.to_string()),
                    format!("problem importing {alias}: {e}"),
                )
            }
        }
    }
}
