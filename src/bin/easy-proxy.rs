// src/bin/easy-proxy.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use easy_proxy::{
    cli::Cli,
    core::{orchestrator::Orchestrator, paths, settings_loader},
    system::{
        config_store::FileConfigStore,
        executor::ProcessRunner,
        prompt::{LinePrompt, PromptSource, TerminalPrompt},
    },
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// Entry point: sets up logging, parses flags and hands over to the
/// interactive flow. Setup errors are reported here; everything after the
/// first menu decides its own exit code.
fn main() -> ExitCode {
    env_logger::init();

    match run_cli(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<ExitCode> {
    log::debug!("CLI args parsed: {:?}", cli);

    let mut settings = settings_loader::load_settings(cli.config.as_deref())
        .context("Could not load settings")?;
    cli.apply_overrides(&mut settings);

    let gradle_path = paths::resolve_gradle_properties_path(cli.gradle_properties.as_deref(), &settings)
        .context("Could not locate gradle.properties")?;
    log::debug!("gradle.properties location: '{}'", gradle_path.display());

    let mut store = FileConfigStore::new(gradle_path);
    let mut runner = ProcessRunner;

    // Widgets need a real terminal; piped input gets the plain line reader.
    let mut prompt: Box<dyn PromptSource> = if cli.plain || !io::stdin().is_terminal() {
        Box::new(LinePrompt::stdio())
    } else {
        Box::new(TerminalPrompt::new())
    };

    let mut orchestrator =
        Orchestrator::new(prompt.as_mut(), &mut runner, &mut store, &settings);
    Ok(orchestrator.run())
}
