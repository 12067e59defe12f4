//! Implementation of the `win-java ca-install` command.

use anyhow::Result;
use clap::Args;

use crate::cli::commands::{ensure_succeeded, host_shell};
use crate::cli::output::output;
use crate::domain::models::{Config, DesiredKeystoreEntry};
use crate::services::KeystoreConverger;

#[derive(Args, Debug)]
pub struct CaInstallArgs {
    /// Alias to store the certificate under
    pub alias: String,

    /// Certificate file to import
    #[arg(short, long)]
    pub certificate: String,

    /// Java home containing bin\keytool.exe (defaults to the machine JAVA_HOME)
    #[arg(long)]
    pub java_home: Option<String>,

    /// Keystore file (defaults to <java_home>\lib\security\cacerts)
    #[arg(short, long)]
    pub keystore: Option<String>,

    /// Keystore password (defaults to keystore.default_storepass from config)
    #[arg(long, env = "WIN_JAVA_STOREPASS", hide_env_values = true)]
    pub storepass: Option<String>,
}

impl CaInstallArgs {
    pub fn into_entry(self, config: &Config) -> DesiredKeystoreEntry {
        DesiredKeystoreEntry {
            alias: self.alias,
            java_home: self.java_home,
            keystore: self.keystore,
            storepass: self
                .storepass
                .unwrap_or_else(|| config.keystore.default_storepass.clone()),
            certificate: self.certificate,
        }
    }
}

pub fn execute(args: CaInstallArgs, config: &Config, json_mode: bool) -> Result<()> {
    let entry = args.into_entry(config);
    let result = KeystoreConverger::new(host_shell(config)).converge(&entry);

    output(&result, json_mode);
    ensure_succeeded(&result)
}
