//! Common test utilities for integration tests
//!
//! `FakeHost` is a stateful stand-in for a Windows machine: it remembers the
//! machine `JAVA_HOME` and the aliases in a single keystore, and answers the
//! commands the convergers issue accordingly.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::Path;

use win_java::services::MACHINE_JAVA_HOME_QUERY;
use win_java::{DomainError, DomainResult, ScriptOutcome, Shell, ShellKind};

#[derive(Debug, Default)]
pub struct FakeHost {
    java_home: RefCell<String>,
    aliases: RefCell<HashSet<String>>,
    script_fails: Cell<bool>,
    import_fails: Cell<bool>,
    script_runs: Cell<usize>,
    imports: Cell<usize>,
}

#[allow(dead_code)]
impl FakeHost {
    pub fn with_java_home(java_home: &str) -> Self {
        let host = Self::default();
        *host.java_home.borrow_mut() = java_home.to_string();
        host
    }

    pub fn add_alias(&self, alias: &str) {
        self.aliases.borrow_mut().insert(alias.to_string());
    }

    pub fn fail_scripts(&self) {
        self.script_fails.set(true);
    }

    pub fn fail_imports(&self) {
        self.import_fails.set(true);
    }

    pub fn java_home(&self) -> String {
        self.java_home.borrow().clone()
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.borrow().contains(alias)
    }

    pub fn script_runs(&self) -> usize {
        self.script_runs.get()
    }

    pub fn imports(&self) -> usize {
        self.imports.get()
    }
}

fn quoted_arg<'a>(command: &'a str, flag: &str) -> Option<&'a str> {
    let start = command.find(&format!("{flag} '"))? + flag.len() + 2;
    let len = command[start..].find('\'')?;
    Some(&command[start..start + len])
}

impl Shell for FakeHost {
    fn run(&self, command: &str, _kind: ShellKind) -> DomainResult<String> {
        if command == MACHINE_JAVA_HOME_QUERY {
            Ok(self.java_home())
        } else {
            Err(DomainError::ExternalCommand {
                command: command.to_string(),
                exit_code: Some(1),
                output: "unknown command".to_string(),
            })
        }
    }

    fn run_script(
        &self,
        _script_path: &Path,
        args: &[&str],
        _kind: ShellKind,
    ) -> DomainResult<ScriptOutcome> {
        self.script_runs.set(self.script_runs.get() + 1);
        if self.script_fails.get() {
            return Ok(ScriptOutcome::failed(1, "Requested registry access is not allowed."));
        }
        *self.java_home.borrow_mut() = args[0].to_string();
        Ok(ScriptOutcome::succeeded(""))
    }

    fn retcode(&self, command: &str, _kind: ShellKind) -> DomainResult<i32> {
        let alias = quoted_arg(command, "-alias").unwrap_or_default().to_string();
        if command.contains(" -list ") {
            return Ok(i32::from(!self.has_alias(&alias)));
        }
        if command.contains(" -import ") {
            self.imports.set(self.imports.get() + 1);
            if self.import_fails.get() {
                return Ok(1);
            }
            self.aliases.borrow_mut().insert(alias);
            return Ok(0);
        }
        Ok(2)
    }
}
