// src/core/configurators/build_tool.rs

use super::{Configurator, Toolbox, describe_failure};
use crate::{
    core::properties::PropertiesBlock,
    models::{ConfigOutcome, FileState, GradleRuntimeSettings, ProxySpec, Target, WriteMode},
    system::{config_store::ConfigStore, error::SystemError, prompt::PromptError},
};
use colored::Colorize;

const SCHEMES: [&str; 2] = ["http", "https"];

/// Writes the proxy settings into Gradle's `gradle.properties`.
#[derive(Debug, Clone)]
pub struct BuildToolConfigurator {
    runtime: GradleRuntimeSettings,
}

impl BuildToolConfigurator {
    /// `runtime` supplies the non-proxy Gradle settings.
    pub fn new(runtime: GradleRuntimeSettings) -> Self {
        Self { runtime }
    }

    /// The proxy entries for both schemes, followed by the fixed runtime
    /// settings (daemon, parallel execution, heap).
    pub fn render_block(&self, spec: &ProxySpec) -> PropertiesBlock {
        let mut block = PropertiesBlock::new();
        for scheme in SCHEMES {
            block = block
                .set(format!("systemProp.{}.proxyHost", scheme), spec.host())
                .set(format!("systemProp.{}.proxyPort", scheme), spec.port());
            if spec.is_authenticated() {
                block = block
                    .set(format!("systemProp.{}.proxyUser", scheme), spec.user())
                    .set(format!("systemProp.{}.proxyPassword", scheme), spec.password());
            }
        }
        block
            .set("org.gradle.daemon", self.runtime.daemon.to_string())
            .set("org.gradle.parallel", self.runtime.parallel.to_string())
            .set("org.gradle.jvmargs", self.runtime.jvm_args.as_str())
    }
}

impl Configurator for BuildToolConfigurator {
    fn target(&self) -> Target {
        Target::BuildTool
    }

    fn apply(
        &self,
        spec: &ProxySpec,
        tools: &mut Toolbox<'_>,
    ) -> Result<ConfigOutcome, PromptError> {
        let content = self.render_block(spec).render();
        let location = tools.store.location().display().to_string();
        log::debug!("Applying Gradle proxy {} to '{}'", spec.redacted_url(), location);

        // Existence is checked now and nowhere else; it decides the write policy.
        let state = match tools.store.exists() {
            Ok(exists) => FileState::from(exists),
            Err(e) => return Ok(ConfigOutcome::failed(Target::BuildTool, describe_failure(&e))),
        };

        let mode = match state {
            FileState::Absent => WriteMode::Overwrite,
            FileState::Present => {
                println!(
                    "{}",
                    format!(t!("gradle.info.file_exists"), path = location).yellow()
                );
                let answer = tools.prompt.ask(t!("prompt.write_mode"))?;
                match WriteMode::parse(&answer) {
                    Some(mode) => mode,
                    None => {
                        log::debug!("Unrecognized write mode '{}'; leaving the file untouched.", answer);
                        return Ok(ConfigOutcome::skipped(
                            Target::BuildTool,
                            format!(t!("gradle.skipped.no_write"), path = location),
                        ));
                    }
                }
            }
        };

        let written = match mode {
            WriteMode::Overwrite => tools.store.write(&content),
            WriteMode::Append => append_block(tools.store, &content),
        };

        Ok(match written {
            Ok(()) => {
                let detail = match mode {
                    WriteMode::Overwrite => format!(t!("gradle.applied.written"), path = location),
                    WriteMode::Append => format!(t!("gradle.applied.appended"), path = location),
                };
                ConfigOutcome::applied(Target::BuildTool, detail)
            }
            Err(e) => ConfigOutcome::failed(Target::BuildTool, describe_failure(&e)),
        })
    }

    fn remove(&self, tools: &mut Toolbox<'_>) -> ConfigOutcome {
        let location = tools.store.location().display().to_string();
        match tools.store.delete() {
            Ok(()) => ConfigOutcome::removed(
                Target::BuildTool,
                format!(t!("gradle.removed"), path = location),
            ),
            Err(SystemError::NotFound { .. }) => ConfigOutcome::skipped(
                Target::BuildTool,
                format!(t!("gradle.absent"), path = location),
            ),
            Err(e @ SystemError::PermissionDenied { .. }) => {
                log::warn!("Could not delete '{}': {}", location, e);
                ConfigOutcome::failed(
                    Target::BuildTool,
                    format!(t!("gradle.remove_failed"), path = location, reason = describe_failure(&e)),
                )
            }
            Err(e @ (SystemError::CommandFailed { .. } | SystemError::Other { .. })) => {
                ConfigOutcome::failed(
                    Target::BuildTool,
                    format!(t!("gradle.remove_failed"), path = location, reason = e),
                )
            }
        }
    }
}

/// Appends `content` after whatever is already in the file. One newline is
/// inserted first if the existing content does not end with one, so the last
/// existing line is not merged with the first new key.
fn append_block(store: &mut dyn ConfigStore, content: &str) -> Result<(), SystemError> {
    let existing = store.read()?;
    if existing.is_empty() || existing.ends_with('\n') {
        store.append(content)
    } else {
        store.append(&format!("\n{}", content))
    }
}
