//! Desired-state inputs for the convergers.
//!
//! The declarative entries (`EnvironmentEntry`, `DesiredKeystoreEntry`) are
//! what a state file or the CLI provides. `DesiredEnvironmentState` is the
//! resolved form the environment converger works with.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Password shipped with every JRE `cacerts` keystore.
pub const DEFAULT_STOREPASS: &str = "changeit";

fn default_storepass() -> String {
    DEFAULT_STOREPASS.to_string()
}

/// Declarative `java_home` entry.
///
/// `name` is the desired `JAVA_HOME` unless `set_to_current_version` is set,
/// in which case it only labels the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnvironmentEntry {
    pub name: String,
    #[serde(default)]
    pub set_to_current_version: bool,
}

/// Where the desired `JAVA_HOME` comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaHomeTarget {
    /// Use this path verbatim.
    Explicit(String),
    /// Use the home of the JRE the registry marks as current.
    CurrentVersion,
}

/// Resolved input for the environment converger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredEnvironmentState {
    pub name: String,
    pub target: JavaHomeTarget,
}

impl DesiredEnvironmentState {
    pub fn explicit(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            target: JavaHomeTarget::Explicit(path),
        }
    }

    pub fn current_version(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: JavaHomeTarget::CurrentVersion,
        }
    }
}

impl From<EnvironmentEntry> for DesiredEnvironmentState {
    fn from(entry: EnvironmentEntry) -> Self {
        if entry.set_to_current_version {
            Self::current_version(entry.name)
        } else {
            Self::explicit(entry.name)
        }
    }
}

/// Declarative `ca_install` entry: a certificate that must be present in a
/// Java keystore under `alias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DesiredKeystoreEntry {
    #[serde(rename = "name")]
    pub alias: String,

    /// JRE/JDK home containing `bin\keytool.exe`. Falls back to the machine
    /// `JAVA_HOME` when absent.
    #[serde(default)]
    pub java_home: Option<String>,

    /// Keystore file. Defaults to `<java_home>\lib\security\cacerts`.
    #[serde(default)]
    pub keystore: Option<String>,

    #[serde(default = "default_storepass")]
    pub storepass: String,

    /// Certificate file to import.
    pub certificate: String,
}

impl DesiredKeystoreEntry {
    pub fn new(alias: impl Into<String>, certificate: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            java_home: None,
            keystore: None,
            storepass: default_storepass(),
            certificate: certificate.into(),
        }
    }

    #[must_use]
    pub fn with_java_home(mut self, java_home: impl Into<String>) -> Self {
        self.java_home = Some(java_home.into());
        self
    }

    #[must_use]
    pub fn with_keystore(mut self, keystore: impl Into<String>) -> Self {
        self.keystore = Some(keystore.into());
        self
    }

    #[must_use]
    pub fn with_storepass(mut self, storepass: impl Into<String>) -> Self {
        self.storepass = storepass.into();
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.alias.trim().is_empty() {
            return Err(DomainError::ValidationFailed(
                "certificate alias cannot be empty".to_string(),
            ));
        }
        if self.certificate.trim().is_empty() {
            return Err(DomainError::ValidationFailed(format!(
                "no certificate file given for alias '{}'",
                self.alias
            )));
        }
        Ok(())
    }
}

/// One entry of a state file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StateEntry {
    JavaHome(EnvironmentEntry),
    CaInstall(DesiredKeystoreEntry),
}

impl StateEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::JavaHome(entry) => &entry.name,
            Self::CaInstall(entry) => &entry.alias,
        }
    }
}

/// Ordered list of desired-state entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub states: Vec<StateEntry>,
}

impl StateFile {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }
}
