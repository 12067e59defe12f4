//! Registry port - read-only access to registry string values.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainResult;

/// Predefined registry root keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    ClassesRoot,
    CurrentUser,
    LocalMachine,
    Users,
    CurrentConfig,
}

impl Hive {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassesRoot => "HKEY_CLASSES_ROOT",
            Self::CurrentUser => "HKEY_CURRENT_USER",
            Self::LocalMachine => "HKEY_LOCAL_MACHINE",
            Self::Users => "HKEY_USERS",
            Self::CurrentConfig => "HKEY_CURRENT_CONFIG",
        }
    }
}

impl fmt::Display for Hive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hive {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HKEY_CLASSES_ROOT" | "HKCR" => Ok(Self::ClassesRoot),
            "HKEY_CURRENT_USER" | "HKCU" => Ok(Self::CurrentUser),
            "HKEY_LOCAL_MACHINE" | "HKLM" => Ok(Self::LocalMachine),
            "HKEY_USERS" | "HKU" => Ok(Self::Users),
            "HKEY_CURRENT_CONFIG" | "HKCC" => Ok(Self::CurrentConfig),
            other => Err(format!("unknown registry hive: {other}")),
        }
    }
}

/// Read-only registry access.
pub trait RegistryReader {
    /// Read the string value `value_name` under `hive\key_path`.
    ///
    /// Fails with `DomainError::RegistryRead` when the key or the value is
    /// absent.
    fn read_value(&self, hive: Hive, key_path: &str, value_name: &str) -> DomainResult<String>;
}

impl<R: RegistryReader + ?Sized> RegistryReader for &R {
    fn read_value(&self, hive: Hive, key_path: &str, value_name: &str) -> DomainResult<String> {
        (**self).read_value(hive, key_path, value_name)
    }
}
