// src/cli/mod.rs

//! Command-line flags and the interactive menus.

use crate::models::Settings;
use clap::Parser;
use std::path::PathBuf;

pub mod menu;

/// Builds the color-aware full help string at runtime.
fn build_help_string() -> &'static str {
    // Mini-renderer for the semantic help template: swaps tags like `<title>`
    // for ANSI styles, or for nothing when colors are off.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// easy-proxy: interactive HTTP proxy setup for Gradle, Git and npm.
#[derive(Parser, Debug)]
#[command(
    name = "easy-proxy",
    author,
    version,
    about,
    help_template = { build_help_string() },
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path of the gradle.properties file to write or delete.
    #[arg(long, value_name = "PATH")]
    pub gradle_properties: Option<String>,

    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read answers as plain lines from stdin, without terminal widgets.
    #[arg(long)]
    pub plain: bool,

    /// Git executable to run.
    #[arg(long, value_name = "PROGRAM")]
    pub git: Option<String>,

    /// npm executable to run.
    #[arg(long, value_name = "PROGRAM")]
    pub npm: Option<String>,
}

impl Cli {
    /// Command-line flags win over the settings file.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(path) = &self.gradle_properties {
            settings.gradle_properties = Some(path.clone());
        }
        if let Some(git) = &self.git {
            settings.git_program = git.clone();
        }
        if let Some(npm) = &self.npm {
            settings.npm_program = npm.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        let cli = Cli::try_parse_from(["easy-proxy"]).unwrap();
        assert!(!cli.plain);
        assert!(cli.config.is_none());

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "easy-proxy",
            "--plain",
            "--gradle-properties",
            "/tmp/gp/gradle.properties",
            "--git",
            "/opt/git/bin/git",
            "--npm",
            "pnpm",
        ])
        .unwrap();
        assert!(cli.plain);

        let mut settings = Settings {
            gradle_properties: Some("~/other.properties".to_string()),
            ..Settings::default()
        };
        cli.apply_overrides(&mut settings);
        assert_eq!(
            settings.gradle_properties.as_deref(),
            Some("/tmp/gp/gradle.properties")
        );
        assert_eq!(settings.git_program, "/opt/git/bin/git");
        assert_eq!(settings.npm_program, "pnpm");
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["easy-proxy", "configure"]).is_err());
    }
}
