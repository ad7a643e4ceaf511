// src/core/commons.rs

// Output helpers shared by the configurators and the orchestrator.

use crate::{
    models::{ConfigAction, ConfigOutcome, ProxySpec},
    system::executor::CommandOutput,
};
use colored::Colorize;

/// Prints the captured streams of a finished command. When a proxy spec is
/// given, its credentials are masked in the echoed text.
pub fn print_command_output(output: &CommandOutput, spec: Option<&ProxySpec>) {
    let show = |text: &str| match spec {
        Some(spec) => spec.redact(text),
        None => text.to_string(),
    };

    let stdout = output.stdout.trim_end();
    if !stdout.is_empty() {
        println!("{} {}", t!("command.label.stdout").dimmed(), show(stdout));
    }
    let stderr = output.stderr.trim_end();
    if !stderr.is_empty() {
        println!("{} {}", t!("command.label.stderr").yellow(), show(stderr));
    }
}

/// Prints a one-line summary of an apply/remove step.
pub fn report_outcome(outcome: &ConfigOutcome) {
    let label = match outcome.action {
        ConfigAction::Applied => t!("outcome.applied").green().bold(),
        ConfigAction::Removed => t!("outcome.removed").green().bold(),
        ConfigAction::Skipped => t!("outcome.skipped").yellow().bold(),
        ConfigAction::Failed => t!("outcome.failed").red().bold(),
    };
    println!("[{}] {}: {}", label, outcome.target.to_string().cyan(), outcome.detail);
}
