//! Discovers the home directory of the current JRE from the registry.

use crate::domain::errors::DomainResult;
use crate::domain::ports::{Hive, RegistryReader};

/// Key the JRE installer writes its version information under.
pub const JRE_REGISTRY_KEY: &str = r"SOFTWARE\JavaSoft\Java Runtime Environment";

/// Resolves the install directory of the JRE marked current in
/// `HKEY_LOCAL_MACHINE`.
///
/// The lookup is chained: `CurrentVersion` names the per-version subkey, and
/// that subkey's `JavaHome` value is the answer. Nothing is cached and the
/// path is not checked on disk.
#[derive(Debug, Clone)]
pub struct JavaHomeResolver<R> {
    registry: R,
}

impl<R: RegistryReader> JavaHomeResolver<R> {
    /// Build a resolver reading from `registry`.
    pub const fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Return the `JavaHome` of the current JRE version.
    pub fn resolve(&self) -> DomainResult<String> {
        let current_version =
            self.registry
                .read_value(Hive::LocalMachine, JRE_REGISTRY_KEY, "CurrentVersion")?;

        let version_key = format!(r"{JRE_REGISTRY_KEY}\{current_version}");
        let java_home = self
            .registry
            .read_value(Hive::LocalMachine, &version_key, "JavaHome")?;

        tracing::debug!(
            current_version = %current_version,
            java_home = %java_home,
            "resolved current JRE home"
        );
        Ok(java_home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemoryRegistry;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_resolve_follows_current_version() {
        let registry = InMemoryRegistry::new()
            .with_value(Hive::LocalMachine, JRE_REGISTRY_KEY, "CurrentVersion", "8.0")
            .with_value(
                Hive::LocalMachine,
                r"SOFTWARE\JavaSoft\Java Runtime Environment\8.0",
                "JavaHome",
                r"C:\Program Files\Java\jre8",
            )
            .with_value(
                Hive::LocalMachine,
                r"SOFTWARE\JavaSoft\Java Runtime Environment\1.7",
                "JavaHome",
                r"C:\Program Files\Java\jre7",
            );

        let resolver = JavaHomeResolver::new(&registry);
        assert_eq!(resolver.resolve().unwrap(), r"C:\Program Files\Java\jre8");
    }

    #[test]
    fn test_resolve_fails_without_current_version() {
        let registry = InMemoryRegistry::new();
        let resolver = JavaHomeResolver::new(&registry);

        match resolver.resolve() {
            Err(DomainError::RegistryRead { value_name, .. }) => {
                assert_eq!(value_name, "CurrentVersion");
            }
            other => panic!("Expected RegistryRead error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_fails_when_version_key_lacks_java_home() {
        let registry = InMemoryRegistry::new().with_value(
            Hive::LocalMachine,
            JRE_REGISTRY_KEY,
            "CurrentVersion",
            "1.8",
        );
        let resolver = JavaHomeResolver::new(&registry);

        match resolver.resolve() {
            Err(DomainError::RegistryRead {
                key_path,
                value_name,
                ..
            }) => {
                assert_eq!(key_path, r"SOFTWARE\JavaSoft\Java Runtime Environment\1.8");
                assert_eq!(value_name, "JavaHome");
            }
            other => panic!("Expected RegistryRead error, got {other:?}"),
        }
    }
}
