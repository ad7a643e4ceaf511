// src/core/orchestrator.rs

use crate::{
    cli::menu,
    core::{
        commons,
        configurators::{self, Configurator, Toolbox},
    },
    models::{ConfigAction, ConfigOutcome, MainMenuChoice, ProxySpec, Settings, TargetMenuChoice},
    system::{
        config_store::ConfigStore,
        executor::CommandRunner,
        prompt::{PromptError, PromptSource},
    },
};
use colored::Colorize;
use std::fmt;
use std::process::ExitCode;

/// Owns one interactive run: the menus, the proxy parameters, and the dispatch
/// to the configurators.
///
/// The flow never loops. It goes from the top menu to exactly one of
/// "configure one target", "remove everything" or "quit", and then ends.
pub struct Orchestrator<'a> {
    prompt: &'a mut dyn PromptSource,
    runner: &'a mut dyn CommandRunner,
    store: &'a mut dyn ConfigStore,
    configurators: Vec<Box<dyn Configurator>>,
}

impl fmt::Debug for Orchestrator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("store", &self.store.location())
            .field(
                "targets",
                &self.configurators.iter().map(|c| c.target()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl<'a> Orchestrator<'a> {
    /// Wires the capabilities to the configurators built from `settings`.
    pub fn new(
        prompt: &'a mut dyn PromptSource,
        runner: &'a mut dyn CommandRunner,
        store: &'a mut dyn ConfigStore,
        settings: &Settings,
    ) -> Self {
        Self {
            prompt,
            runner,
            store,
            configurators: configurators::registry(settings),
        }
    }

    /// Runs the whole interaction and maps it to a process exit code.
    ///
    /// The prompt source is closed exactly once when this returns, whichever
    /// path was taken. Failed configuration steps do not change the exit code;
    /// only an unexpected input error does.
    pub fn run(&mut self) -> ExitCode {
        let result = {
            let mut guarded =
                scopeguard::guard(&mut *self, |orchestrator| orchestrator.prompt.close());
            guarded.execute()
        };

        let code = match result {
            Ok(outcomes) => {
                let failed = outcomes
                    .iter()
                    .filter(|o| o.action == ConfigAction::Failed)
                    .count();
                log::debug!("Run finished: {} step(s), {} failed.", outcomes.len(), failed);
                ExitCode::SUCCESS
            }
            Err(PromptError::Closed) => {
                println!("\n{}", t!("run.info.input_closed").yellow());
                ExitCode::SUCCESS
            }
            Err(e @ PromptError::Io(_)) => {
                eprintln!("\n{}: {}", "Error".red().bold(), e);
                ExitCode::FAILURE
            }
        };
        println!("{}", t!("run.info.finished"));
        code
    }

    /// Walks the menus once and returns what every executed step reported.
    ///
    /// Only a prompt failure is an error: configurator failures come back as
    /// `Failed` outcomes.
    pub fn execute(&mut self) -> Result<Vec<ConfigOutcome>, PromptError> {
        menu::show_main_menu();
        let answer = self.prompt.ask(t!("prompt.select_option"))?;

        match MainMenuChoice::parse(&answer) {
            Some(MainMenuChoice::Authenticated) => {
                let spec = self.collect_proxy_spec(true)?;
                self.configure(&spec)
            }
            Some(MainMenuChoice::Unauthenticated) => {
                let spec = self.collect_proxy_spec(false)?;
                self.configure(&spec)
            }
            Some(MainMenuChoice::RemoveAll) => Ok(self.remove_all()),
            Some(MainMenuChoice::Quit) => Ok(Vec::new()),
            None => {
                log::debug!("Unrecognized main menu input '{}'; nothing to do.", answer);
                Ok(Vec::new())
            }
        }
    }

    /// Asks for host and port, plus user and password on the authenticated
    /// branch, in that order.
    fn collect_proxy_spec(&mut self, authenticated: bool) -> Result<ProxySpec, PromptError> {
        let host = self.prompt.ask(t!("prompt.proxy_host"))?;
        let port = self.prompt.ask(t!("prompt.proxy_port"))?;

        let spec = if authenticated {
            let user = self.prompt.ask(t!("prompt.proxy_user"))?;
            let password = self.prompt.ask_secret(t!("prompt.proxy_password"))?;
            ProxySpec::authenticated(host, port, user, password)
        } else {
            ProxySpec::anonymous(host, port)
        };
        log::debug!("Collected proxy parameters: {:?}", spec);
        Ok(spec)
    }

    /// Shows the target menu and applies `spec` to the chosen tool.
    fn configure(&mut self, spec: &ProxySpec) -> Result<Vec<ConfigOutcome>, PromptError> {
        menu::show_target_menu();
        let answer = self.prompt.ask(t!("prompt.select_option"))?;

        let target = match TargetMenuChoice::parse(&answer) {
            Some(TargetMenuChoice::Target(target)) => target,
            Some(TargetMenuChoice::Quit) => return Ok(Vec::new()),
            None => {
                log::debug!("Unrecognized target menu input '{}'; nothing to do.", answer);
                return Ok(Vec::new());
            }
        };

        let Some(configurator) = self.configurators.iter().find(|c| c.target() == target) else {
            log::warn!("No configurator registered for {}.", target);
            return Ok(Vec::new());
        };

        let mut tools = Toolbox {
            prompt: &mut *self.prompt,
            runner: &mut *self.runner,
            store: &mut *self.store,
        };
        let outcome = configurator.apply(spec, &mut tools)?;
        commons::report_outcome(&outcome);
        Ok(vec![outcome])
    }

    /// Removes the proxy configuration of every tool.
    ///
    /// Each removal runs regardless of how the previous ones went; none of them
    /// can abort the sequence.
    pub fn remove_all(&mut self) -> Vec<ConfigOutcome> {
        println!("{}", t!("remove.info.header").bold());
        let mut outcomes = Vec::with_capacity(self.configurators.len());
        for configurator in &self.configurators {
            let mut tools = Toolbox {
                prompt: &mut *self.prompt,
                runner: &mut *self.runner,
                store: &mut *self.store,
            };
            let outcome = configurator.remove(&mut tools);
            commons::report_outcome(&outcome);
            outcomes.push(outcome);
        }
        outcomes
    }
}
