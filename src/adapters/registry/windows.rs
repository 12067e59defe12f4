//! Registry reader backed by the Windows registry API.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{Hive, RegistryReader};

/// Reads values from the live registry of the local machine.
///
/// On non-Windows targets every read fails, so the resolver reports a
/// registry error instead of the binary failing to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsRegistry;

impl WindowsRegistry {
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
impl RegistryReader for WindowsRegistry {
    fn read_value(&self, hive: Hive, key_path: &str, value_name: &str) -> DomainResult<String> {
        use winreg::enums::{
            HKEY_CLASSES_ROOT, HKEY_CURRENT_CONFIG, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE,
            HKEY_USERS,
        };
        use winreg::RegKey;

        let root = RegKey::predef(match hive {
            Hive::ClassesRoot => HKEY_CLASSES_ROOT,
            Hive::CurrentUser => HKEY_CURRENT_USER,
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
            Hive::Users => HKEY_USERS,
            Hive::CurrentConfig => HKEY_CURRENT_CONFIG,
        });

        let key = root.open_subkey(key_path).map_err(|e| {
            DomainError::registry_read(hive, key_path, value_name, format!("key not found: {e}"))
        })?;

        let value: String = key.get_value(value_name).map_err(|e| {
            DomainError::registry_read(hive, key_path, value_name, format!("value not found: {e}"))
        })?;

        tracing::debug!(%hive, key_path, value_name, value = %value, "registry value read");
        Ok(value)
    }
}

#[cfg(not(windows))]
impl RegistryReader for WindowsRegistry {
    fn read_value(&self, hive: Hive, key_path: &str, value_name: &str) -> DomainResult<String> {
        Err(DomainError::registry_read(
            hive,
            key_path,
            value_name,
            format!("the registry is not available on {}", std::env::consts::OS),
        ))
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_reads_fail_off_windows() {
        let result = WindowsRegistry::new().read_value(
            Hive::LocalMachine,
            r"SOFTWARE\JavaSoft\Java Runtime Environment",
            "CurrentVersion",
        );
        assert!(matches!(result, Err(DomainError::RegistryRead { .. })));
    }
}
