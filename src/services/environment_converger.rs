//! Converges the machine-wide `JAVA_HOME` environment variable.
//!
//! Setting a machine-scope variable requires an elevated process. That is a
//! precondition of [`EnvironmentConverger::converge`]; it is not checked here,
//! an unprivileged run simply surfaces as a failed script.

use std::path::PathBuf;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ConvergenceResult, DesiredEnvironmentState, JavaHomeTarget};
use crate::domain::ports::{RegistryReader, Shell, ShellKind};
use crate::services::java_home_resolver::JavaHomeResolver;

/// PowerShell expression printing the machine-scope `JAVA_HOME`.
pub const MACHINE_JAVA_HOME_QUERY: &str =
    r#"[Environment]::GetEnvironmentVariable("JAVA_HOME","Machine")"#;

/// Read the machine-scope `JAVA_HOME`. An unset variable reads as `""`.
pub fn query_machine_java_home<S: Shell>(shell: &S) -> DomainResult<String> {
    shell.run(MACHINE_JAVA_HOME_QUERY, ShellKind::PowerShell)
}

/// Sets `JAVA_HOME` through a mutation script, but only when the current
/// value differs from the desired one.
pub struct EnvironmentConverger<R, S> {
    resolver: JavaHomeResolver<R>,
    shell: S,
    script: PathBuf,
}

impl<R: RegistryReader, S: Shell> EnvironmentConverger<R, S> {
    /// `script` is invoked with the desired value as its only argument.
    pub fn new(registry: R, shell: S, script: impl Into<PathBuf>) -> Self {
        Self {
            resolver: JavaHomeResolver::new(registry),
            shell,
            script: script.into(),
        }
    }

    /// Run the script only when machine `JAVA_HOME` differs from the target.
    #[tracing::instrument(skip_all, fields(subject = %desired.name))]
    pub fn converge(&self, desired: &DesiredEnvironmentState) -> ConvergenceResult {
        let target = match &desired.target {
            JavaHomeTarget::Explicit(path) => path.clone(),
            JavaHomeTarget::CurrentVersion => match self.resolver.resolve() {
                Ok(home) => home,
                Err(e) => {
                    tracing::warn!(error = %e, "could not resolve current JRE home");
                    return ConvergenceResult::failed(
                        &desired.name,
                        None,
                        None,
                        format!("could not determine the current JRE home: {e}"),
                    );
                }
            },
        };

        let current = match query_machine_java_home(&self.shell) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "could not read JAVA_HOME");
                return ConvergenceResult::failed(
                    &desired.name,
                    None,
                    Some(target),
                    format!("could not read the current JAVA_HOME: {e}"),
                );
            }
        };

        // Exact comparison: `C:\java` and `C:\Java` are different values.
        if target == current {
            tracing::info!(java_home = %target, "JAVA_HOME already set");
            return ConvergenceResult::unchanged(
                &desired.name,
                format!("JAVA_HOME was already set to {target}"),
            );
        }

        tracing::info!(old = %current, new = %target, "setting JAVA_HOME");
        match self
            .shell
            .run_script(&self.script, &[target.as_str()], ShellKind::PowerShell)
        {
            Ok(outcome) if outcome.success => ConvergenceResult::changed(
                &desired.name,
                Some(current),
                Some(target.clone()),
                format!("JAVA_HOME was set to {target}"),
            ),
            Ok(outcome) => {
                tracing::warn!(exit_code = ?outcome.exit_code, output = %outcome.output, "set_java_home script failed");
                let detail = if outcome.output.is_empty() {
                    outcome
                        .exit_code
                        .map_or_else(|| "no exit code".to_string(), |c| format!("exit code {c}"))
                } else {
                    outcome.output
                };
                ConvergenceResult::failed(
                    &desired.name,
                    Some(current),
                    Some(target.clone()),
                    format!("attempted to set JAVA_HOME to {target} but something went wrong: {detail}"),
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "set_java_home script could not run");
                ConvergenceResult::failed(
                    &desired.name,
                    Some(current),
                    Some(target.clone()),
                    format!("attempted to set JAVA_HOME to {target} but something went wrong: {e}"),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemoryRegistry;
    use crate::adapters::shell::{MockShell, ShellCall};
    use crate::domain::errors::DomainError;
    use crate::domain::ports::{Hive, ScriptOutcome};
    use crate::services::java_home_resolver::JRE_REGISTRY_KEY;
    use std::path::Path;

    const SCRIPT: &str = "set_java_home.ps1";

    fn jre8_registry() -> InMemoryRegistry {
        InMemoryRegistry::new()
            .with_value(Hive::LocalMachine, JRE_REGISTRY_KEY, "CurrentVersion", "1.8")
            .with_value(
                Hive::LocalMachine,
                &format!(r"{JRE_REGISTRY_KEY}\1.8"),
                "JavaHome",
                r"C:\jre8",
            )
    }

    #[test]
    fn test_already_set_does_not_run_script() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new().with_run_output(r"C:\java");
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\java"));

        assert!(result.succeeded);
        assert!(!result.changed);
        assert_eq!(result.message, r"JAVA_HOME was already set to C:\java");
        assert!(shell.script_calls().is_empty());
        assert_eq!(
            shell.calls(),
            vec![ShellCall::Run {
                command: MACHINE_JAVA_HOME_QUERY.to_string()
            }]
        );
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new().with_run_output(r"C:\Java");
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\java"));

        assert!(result.changed);
        assert!(result.succeeded);
        assert_eq!(result.previous_value.as_deref(), Some(r"C:\Java"));
        assert_eq!(result.new_value.as_deref(), Some(r"C:\java"));
    }

    #[test]
    fn test_trailing_separator_is_not_normalized() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new().with_run_output(r"C:\java\");
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\java"));
        assert!(result.changed);
    }

    #[test]
    fn test_trailing_whitespace_is_compared_exactly() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new()
            .with_run_output(r"C:\java")
            .with_run_output(r"C:\java ");
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);
        let desired = DesiredEnvironmentState::explicit(r"C:\java ");

        let first = converger.converge(&desired);
        assert!(first.changed);
        assert_eq!(first.new_value.as_deref(), Some(r"C:\java "));

        let second = converger.converge(&desired);
        assert!(!second.changed);
        assert!(second.succeeded);
        assert_eq!(shell.script_calls().len(), 1);
    }

    #[test]
    fn test_current_value_with_trailing_space_is_not_the_target() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new().with_run_output(r"C:\x ");
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\x"));
        assert!(result.changed);
        assert_eq!(result.previous_value.as_deref(), Some(r"C:\x "));
    }

    #[test]
    fn test_current_version_dispatches_resolved_home() {
        let registry = jre8_registry();
        let shell = MockShell::new().with_run_output(r"C:\jre7");
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::current_version("set_me"));

        assert_eq!(
            result,
            ConvergenceResult {
                subject: "set_me".to_string(),
                changed: true,
                previous_value: Some(r"C:\jre7".to_string()),
                new_value: Some(r"C:\jre8".to_string()),
                succeeded: true,
                message: r"JAVA_HOME was set to C:\jre8".to_string(),
            }
        );
        assert_eq!(
            shell.script_calls(),
            vec![ShellCall::Script {
                path: Path::new(SCRIPT).to_path_buf(),
                args: vec![r"C:\jre8".to_string()],
            }]
        );
    }

    #[test]
    fn test_script_failure_reports_attempt() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new()
            .with_run_output(r"C:\jre7")
            .with_script_outcome(ScriptOutcome::failed(1, "Access is denied"));
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\jre8"));

        assert!(!result.succeeded);
        assert!(!result.changed);
        assert_eq!(result.previous_value.as_deref(), Some(r"C:\jre7"));
        assert_eq!(result.new_value.as_deref(), Some(r"C:\jre8"));
        assert!(result.message.contains("Access is denied"));
    }

    #[test]
    fn test_script_spawn_failure_is_a_failed_result() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new()
            .with_run_output("")
            .with_script_response(Err(DomainError::CommandSpawn {
                program: "powershell".to_string(),
                reason: "not found".to_string(),
            }));
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\jre8"));

        assert!(!result.succeeded);
        assert!(!result.changed);
        assert_eq!(result.previous_value.as_deref(), Some(""));
    }

    #[test]
    fn test_resolver_failure_skips_shell() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new();
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::current_version("set_me"));

        assert!(!result.succeeded);
        assert!(!result.changed);
        assert!(result.message.contains("CurrentVersion"));
        assert!(shell.calls().is_empty());
    }

    #[test]
    fn test_query_failure_is_a_failed_result() {
        let registry = InMemoryRegistry::new();
        let shell = MockShell::new().with_run_response(Err(DomainError::ExternalCommand {
            command: MACHINE_JAVA_HOME_QUERY.to_string(),
            exit_code: Some(1),
            output: "blocked".to_string(),
        }));
        let converger = EnvironmentConverger::new(&registry, &shell, SCRIPT);

        let result = converger.converge(&DesiredEnvironmentState::explicit(r"C:\jre8"));

        assert!(!result.succeeded);
        assert!(shell.script_calls().is_empty());
    }
}
