//! # Target Configurators
//!
//! One configurator per tool ecosystem. Each knows how to apply a
//! [`ProxySpec`] in its tool's own format and how to remove it again.
//!
//! - **`build_tool`**: Gradle. Renders a `gradle.properties` block and decides
//!   between create, overwrite and append.
//! - **`version_control`**: Git. Sets/unsets the global `http.proxy` key.
//! - **`package_manager`**: npm. Sets/deletes the `proxy` config value.
//!
//! Configurators never fail the run: every store or command error is turned
//! into a [`ConfigOutcome`] on the spot. The one exception is the prompt
//! source. If it cannot answer, nothing else can happen, so
//! [`PromptError`] is handed back to the orchestrator.

pub mod build_tool;
pub mod package_manager;
pub mod version_control;

use crate::{
    core::commons,
    models::{ConfigOutcome, ProxySpec, Settings, Target},
    system::{
        config_store::ConfigStore,
        error::SystemError,
        executor::{CommandOutput, CommandRunner, CommandSpec},
        prompt::{PromptError, PromptSource},
    },
};
use colored::Colorize;
use std::fmt;

pub use build_tool::BuildToolConfigurator;
pub use package_manager::PackageManagerConfigurator;
pub use version_control::VersionControlConfigurator;

/// The capabilities a configurator may call through during one step.
pub struct Toolbox<'a> {
    pub prompt: &'a mut dyn PromptSource,
    pub runner: &'a mut dyn CommandRunner,
    pub store: &'a mut dyn ConfigStore,
}

impl fmt::Debug for Toolbox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolbox")
            .field("store", &self.store.location())
            .finish_non_exhaustive()
    }
}

/// Applies or removes the proxy configuration of one tool.
pub trait Configurator {
    /// The tool this configurator manages.
    fn target(&self) -> Target;

    /// Installs `spec`. Only a prompt failure is an error.
    fn apply(
        &self,
        spec: &ProxySpec,
        tools: &mut Toolbox<'_>,
    ) -> Result<ConfigOutcome, PromptError>;

    /// Must be idempotent: removing an already-absent configuration is a
    /// `Skipped` outcome, never a failure. A tool that cannot tell "absent"
    /// apart from "deleted" (npm) reports `Removed` with a detail saying the
    /// value may not have been set.
    fn remove(&self, tools: &mut Toolbox<'_>) -> ConfigOutcome;
}

/// Builds every configurator, in the order `remove_all` visits them.
pub fn registry(settings: &Settings) -> Vec<Box<dyn Configurator>> {
    vec![
        Box::new(BuildToolConfigurator::new(settings.gradle.clone())),
        Box::new(VersionControlConfigurator::new(&settings.git_program)),
        Box::new(PackageManagerConfigurator::new(&settings.npm_program)),
    ]
}

/// A user-facing sentence for any system failure.
pub(crate) fn describe_failure(error: &SystemError) -> String {
    match error {
        SystemError::NotFound { path } => {
            format!(t!("error.not_found"), path = path.display())
        }
        SystemError::PermissionDenied { path, .. } => {
            format!(t!("error.permission_denied"), path = path.display())
        }
        SystemError::CommandFailed { command, source } => {
            format!(t!("error.command_failed"), command = command, reason = source)
        }
        SystemError::Other { .. } => error.to_string(),
    }
}

/// The failure detail of a non-zero exit: the tool's own stderr when it wrote
/// any, with the credentials of `spec` masked.
fn describe_exit(command: &CommandSpec, output: &CommandOutput, spec: Option<&ProxySpec>) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return match spec {
            Some(spec) => spec.redact(stderr),
            None => stderr.to_string(),
        };
    }
    let status = output
        .status
        .map_or_else(|| "signal".to_string(), |code| code.to_string());
    format!(t!("error.exit_status"), command = command.display(), status = status)
}

/// Runs one command, echoing it and whatever it printed.
fn run_step(
    runner: &mut dyn CommandRunner,
    command: &CommandSpec,
    spec: Option<&ProxySpec>,
) -> Result<CommandOutput, SystemError> {
    println!("{} {}", "$".dimmed(), command.display().dimmed());
    let result = runner.run(command);
    match &result {
        Ok(output) => commons::print_command_output(output, spec),
        Err(e) => println!("{}", describe_failure(e).red()),
    }
    result
}

/// Shared apply flow of the command-driven configurators: set the value, then
/// read it back. The read-back runs whatever the set did and is informational.
fn apply_with_commands(
    target: Target,
    runner: &mut dyn CommandRunner,
    set: &CommandSpec,
    read_back: &CommandSpec,
    spec: &ProxySpec,
) -> ConfigOutcome {
    let shown_url = spec.redacted_url();
    println!(
        "{}",
        format!(t!("tool.info.requested"), tool = target, url = shown_url).cyan()
    );

    let set_result = run_step(runner, set, Some(spec));
    let _ = run_step(runner, read_back, Some(spec));

    match set_result {
        Ok(output) if output.success() => ConfigOutcome::applied(
            target,
            format!(t!("tool.applied"), url = shown_url),
        ),
        Ok(output) => ConfigOutcome::failed(target, describe_exit(set, &output, Some(spec))),
        Err(e) => ConfigOutcome::failed(target, describe_failure(&e)),
    }
}

/// Shared remove flow: unset the value, then read back. `absent_status` is the
/// exit status the tool uses for "there was nothing to unset", if it has one.
fn remove_with_commands(
    target: Target,
    runner: &mut dyn CommandRunner,
    unset: &CommandSpec,
    read_back: &CommandSpec,
    absent_status: Option<i32>,
) -> ConfigOutcome {
    println!(
        "{}",
        format!(t!("tool.info.removing"), tool = target).cyan()
    );

    let unset_result = run_step(runner, unset, None);
    let _ = run_step(runner, read_back, None);

    match unset_result {
        Ok(output) if output.success() => {
            ConfigOutcome::removed(target, t!("tool.removed"))
        }
        Ok(output) if absent_status.is_some() && output.status == absent_status => {
            ConfigOutcome::skipped(target, t!("tool.absent"))
        }
        Ok(output) => ConfigOutcome::failed(target, describe_exit(unset, &output, None)),
        Err(e) => ConfigOutcome::failed(target, describe_failure(&e)),
    }
}
