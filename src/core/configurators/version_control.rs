// src/core/configurators/version_control.rs

use super::{Configurator, Toolbox, apply_with_commands, remove_with_commands};
use crate::{
    constants::GIT_UNSET_MISSING_KEY_STATUS,
    models::{ConfigOutcome, ProxySpec, Target},
    system::{executor::CommandSpec, prompt::PromptError},
};

/// Manages Git's global `http.proxy` key.
#[derive(Debug, Clone)]
pub struct VersionControlConfigurator {
    program: String,
}

impl VersionControlConfigurator {
    /// `program` is the Git executable to run.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn git(&self) -> CommandSpec {
        CommandSpec::new(&self.program).args(["config", "--global"])
    }

    /// Lists every global `http.*` key, so the user sees the effective state.
    fn read_back(&self) -> CommandSpec {
        self.git().args(["--get-regexp", "http.*"])
    }
}

impl Configurator for VersionControlConfigurator {
    fn target(&self) -> Target {
        Target::VersionControl
    }

    fn apply(
        &self,
        spec: &ProxySpec,
        tools: &mut Toolbox<'_>,
    ) -> Result<ConfigOutcome, PromptError> {
        let set = self
            .git()
            .arg("http.proxy")
            .sensitive_arg(spec.proxy_url(), spec.redacted_url());
        Ok(apply_with_commands(
            self.target(),
            tools.runner,
            &set,
            &self.read_back(),
            spec,
        ))
    }

    fn remove(&self, tools: &mut Toolbox<'_>) -> ConfigOutcome {
        let unset = self.git().args(["--unset", "http.proxy"]);
        remove_with_commands(
            self.target(),
            tools.runner,
            &unset,
            &self.read_back(),
            Some(GIT_UNSET_MISSING_KEY_STATUS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfigAction;
    use crate::system::testing::{MemoryStore, RecordingRunner, Scripted, ScriptedPrompt};

    fn with_tools<T>(runner: &mut RecordingRunner, f: impl FnOnce(&mut Toolbox<'_>) -> T) -> T {
        let mut prompt = ScriptedPrompt::new(&[]);
        let mut store = MemoryStore::absent();
        let mut tools = Toolbox {
            prompt: &mut prompt,
            runner,
            store: &mut store,
        };
        f(&mut tools)
    }

    #[test]
    fn test_apply_anonymous_sets_then_reads_back() {
        let mut runner = RecordingRunner::new();
        let spec = ProxySpec::anonymous("proxy.example.com", "8080");
        let outcome = with_tools(&mut runner, |tools| {
            VersionControlConfigurator::new("git").apply(&spec, tools).unwrap()
        });

        assert_eq!(outcome.action, ConfigAction::Applied);
        assert_eq!(
            runner.invocations(),
            [
                "git config --global http.proxy proxy.example.com:8080",
                "git config --global --get-regexp http.*",
            ]
        );
    }

    #[test]
    fn test_apply_authenticated_passes_real_credentials_but_reports_masked() {
        let mut runner = RecordingRunner::new();
        let spec = ProxySpec::authenticated("proxy.example.com", "3128", "alice", "secret");
        let outcome = with_tools(&mut runner, |tools| {
            VersionControlConfigurator::new("git").apply(&spec, tools).unwrap()
        });

        assert_eq!(
            runner.invocations().first().map(String::as_str),
            Some("git config --global http.proxy alice:secret@proxy.example.com:3128")
        );
        assert!(!outcome.detail.contains("secret"));
    }

    #[test]
    fn test_apply_failure_surfaces_stderr_and_still_reads_back() {
        let mut runner = RecordingRunner::new().respond(
            "git config --global http.proxy",
            Scripted::exit(4, "", "error: could not lock config file\n"),
        );
        let spec = ProxySpec::anonymous("h", "1");
        let outcome = with_tools(&mut runner, |tools| {
            VersionControlConfigurator::new("git").apply(&spec, tools).unwrap()
        });

        assert_eq!(outcome.action, ConfigAction::Failed);
        assert_eq!(outcome.detail, "error: could not lock config file");
        assert_eq!(runner.invocations().len(), 2);
    }

    #[test]
    fn test_remove_unsets_then_reads_back() {
        let mut runner = RecordingRunner::new();
        let outcome = with_tools(&mut runner, |tools| {
            VersionControlConfigurator::new("git").remove(tools)
        });

        assert_eq!(outcome.action, ConfigAction::Removed);
        assert_eq!(
            runner.invocations(),
            [
                "git config --global --unset http.proxy",
                "git config --global --get-regexp http.*",
            ]
        );
    }

    #[test]
    fn test_remove_missing_key_is_skipped() {
        let mut runner = RecordingRunner::new()
            .respond("git config --global --unset", Scripted::exit(5, "", ""))
            .respond("git config --global --get-regexp", Scripted::exit(1, "", ""));
        let outcome = with_tools(&mut runner, |tools| {
            VersionControlConfigurator::new("git").remove(tools)
        });
        assert_eq!(outcome.action, ConfigAction::Skipped);
    }

    #[test]
    fn test_missing_git_is_failed_not_fatal() {
        let mut runner = RecordingRunner::without_tools();
        let outcome = with_tools(&mut runner, |tools| {
            VersionControlConfigurator::new("git").remove(tools)
        });
        assert_eq!(outcome.action, ConfigAction::Failed);
        assert_eq!(runner.invocations().len(), 2);
    }
}
