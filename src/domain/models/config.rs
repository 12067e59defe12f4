use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::desired_state::DEFAULT_STOREPASS;

/// Main configuration structure for win-java
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Shell used for every external command
    #[serde(default)]
    pub shell: ShellConfig,

    /// Scripts dispatched by the convergers
    #[serde(default)]
    pub scripts: ScriptsConfig,

    /// Keystore defaults
    #[serde(default)]
    pub keystore: KeystoreConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files. Logs go to stderr only when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ShellConfig {
    /// PowerShell executable (`powershell` or `pwsh`, or a full path)
    #[serde(default = "default_powershell_program")]
    pub powershell_program: String,
}

fn default_powershell_program() -> String {
    "powershell".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            powershell_program: default_powershell_program(),
        }
    }
}

/// Script locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScriptsConfig {
    /// PowerShell script that sets the machine `JAVA_HOME` to its first argument
    #[serde(default = "default_set_java_home_script")]
    pub set_java_home: PathBuf,
}

fn default_set_java_home_script() -> PathBuf {
    PathBuf::from("scripts").join("set_java_home.ps1")
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            set_java_home: default_set_java_home_script(),
        }
    }
}

/// Keystore defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KeystoreConfig {
    /// Store password used when an entry does not name one
    #[serde(default = "default_storepass")]
    pub default_storepass: String,
}

fn default_storepass() -> String {
    DEFAULT_STOREPASS.to_string()
}

impl Default for KeystoreConfig {
    fn default() -> Self {
        Self {
            default_storepass: default_storepass(),
        }
    }
}
