//! In-memory registry for tests and dry runs.

use std::collections::{HashMap, HashSet};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{Hive, RegistryReader};

/// Registry fake. Key paths and value names compare case-insensitively, as
/// they do in the real registry; the trailing separator is ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    keys: HashSet<(Hive, String)>,
    values: HashMap<(Hive, String, String), String>,
}

fn normalize_key(key_path: &str) -> String {
    key_path.trim_end_matches('\\').to_ascii_lowercase()
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(
        mut self,
        hive: Hive,
        key_path: &str,
        value_name: &str,
        value: impl Into<String>,
    ) -> Self {
        self.set_value(hive, key_path, value_name, value);
        self
    }

    pub fn set_value(&mut self, hive: Hive, key_path: &str, value_name: &str, value: impl Into<String>) {
        let key = normalize_key(key_path);
        self.keys.insert((hive, key.clone()));
        self.values
            .insert((hive, key, value_name.to_ascii_lowercase()), value.into());
    }

    pub fn remove_value(&mut self, hive: Hive, key_path: &str, value_name: &str) {
        self.values.remove(&(
            hive,
            normalize_key(key_path),
            value_name.to_ascii_lowercase(),
        ));
    }
}

impl RegistryReader for InMemoryRegistry {
    fn read_value(&self, hive: Hive, key_path: &str, value_name: &str) -> DomainResult<String> {
        let key = normalize_key(key_path);
        if !self.keys.contains(&(hive, key.clone())) {
            return Err(DomainError::registry_read(hive, key_path, value_name, "key not found"));
        }
        self.values
            .get(&(hive, key, value_name.to_ascii_lowercase()))
            .cloned()
            .ok_or_else(|| DomainError::registry_read(hive, key_path, value_name, "value not found"))
    }
}
