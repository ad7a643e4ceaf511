// src/core/configurators/package_manager.rs

use super::{Configurator, Toolbox, apply_with_commands, remove_with_commands};
use crate::{
    models::{ConfigAction, ConfigOutcome, ProxySpec, Target},
    system::{executor::CommandSpec, prompt::PromptError},
};

/// Manages npm's `proxy` config value.
#[derive(Debug, Clone)]
pub struct PackageManagerConfigurator {
    program: String,
}

impl PackageManagerConfigurator {
    /// `program` is the npm executable to run.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn npm_config(&self, action: &str) -> CommandSpec {
        CommandSpec::new(&self.program).args(["config", action])
    }

    fn read_back(&self) -> CommandSpec {
        self.npm_config("get").arg("proxy")
    }
}

impl Configurator for PackageManagerConfigurator {
    fn target(&self) -> Target {
        Target::PackageManager
    }

    fn apply(
        &self,
        spec: &ProxySpec,
        tools: &mut Toolbox<'_>,
    ) -> Result<ConfigOutcome, PromptError> {
        let set = self
            .npm_config("set")
            .arg("proxy")
            .sensitive_arg(spec.proxy_url(), spec.redacted_url());
        Ok(apply_with_commands(
            self.target(),
            tools.runner,
            &set,
            &self.read_back(),
            spec,
        ))
    }

    // npm exits 0 when deleting a key that was never set, so there is no
    // distinct "absent" status to look for. The report says so instead of
    // claiming a proxy was there.
    fn remove(&self, tools: &mut Toolbox<'_>) -> ConfigOutcome {
        let delete = self.npm_config("delete").arg("proxy");
        let outcome =
            remove_with_commands(self.target(), tools.runner, &delete, &self.read_back(), None);
        match outcome.action {
            ConfigAction::Removed => {
                ConfigOutcome::removed(self.target(), t!("npm.removed_unverified"))
            }
            _ => outcome,
        }
    }
}
