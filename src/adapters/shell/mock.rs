//! Mock shell for testing.
//!
//! Records every call and answers from per-operation queues, so converger
//! tests can script exact host behaviour and then inspect what was run.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainResult;
use crate::domain::ports::{ScriptOutcome, Shell, ShellKind};

/// A call made against [`MockShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCall {
    Run { command: String },
    Script { path: PathBuf, args: Vec<String> },
    Retcode { command: String },
}

/// Test-double shell.
///
/// With an empty queue `run` answers `Ok("")`, `run_script` succeeds and
/// `retcode` returns 0.
#[derive(Debug, Default)]
pub struct MockShell {
    run_responses: RefCell<VecDeque<DomainResult<String>>>,
    script_responses: RefCell<VecDeque<DomainResult<ScriptOutcome>>>,
    retcodes: RefCell<VecDeque<DomainResult<i32>>>,
    calls: RefCell<Vec<ShellCall>>,
}

impl MockShell {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_run_output(self, output: impl Into<String>) -> Self {
        self.run_responses.borrow_mut().push_back(Ok(output.into()));
        self
    }

    #[must_use]
    pub fn with_run_response(self, response: DomainResult<String>) -> Self {
        self.run_responses.borrow_mut().push_back(response);
        self
    }

    #[must_use]
    pub fn with_script_outcome(self, outcome: ScriptOutcome) -> Self {
        self.script_responses.borrow_mut().push_back(Ok(outcome));
        self
    }

    #[must_use]
    pub fn with_script_response(self, response: DomainResult<ScriptOutcome>) -> Self {
        self.script_responses.borrow_mut().push_back(response);
        self
    }

    #[must_use]
    pub fn with_retcode(self, code: i32) -> Self {
        self.retcodes.borrow_mut().push_back(Ok(code));
        self
    }

    #[must_use]
    pub fn with_retcode_response(self, response: DomainResult<i32>) -> Self {
        self.retcodes.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.borrow().clone()
    }

    pub fn script_calls(&self) -> Vec<ShellCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ShellCall::Script { .. }))
            .cloned()
            .collect()
    }

    pub fn retcode_commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ShellCall::Retcode { command } => Some(command.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Shell for MockShell {
    fn run(&self, command: &str, _kind: ShellKind) -> DomainResult<String> {
        self.calls.borrow_mut().push(ShellCall::Run {
            command: command.to_string(),
        });
        self.run_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    fn run_script(
        &self,
        script_path: &Path,
        args: &[&str],
        _kind: ShellKind,
    ) -> DomainResult<ScriptOutcome> {
        self.calls.borrow_mut().push(ShellCall::Script {
            path: script_path.to_path_buf(),
            args: args.iter().map(ToString::to_string).collect(),
        });
        self.script_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ScriptOutcome::succeeded("")))
    }

    fn retcode(&self, command: &str, _kind: ShellKind) -> DomainResult<i32> {
        self.calls.borrow_mut().push(ShellCall::Retcode {
            command: command.to_string(),
        });
        self.retcodes.borrow_mut().pop_front().unwrap_or(Ok(0))
    }
}
