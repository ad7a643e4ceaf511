// src/system/executor.rs

use super::error::SystemError;
use std::fmt;
use std::path::Path;
use std::io::{self, ErrorKind};
use std::process::{Command as StdCommand, Output, Stdio};

/// A program plus its argv, and the form of that argv which is safe to show.
///
/// Commands are never handed to a shell, so a password containing spaces or
/// metacharacters reaches the tool exactly as typed.
#[derive(Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    shown_args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            shown_args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        self.shown_args.push(arg.clone());
        self.args.push(arg);
        self
    }

    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        args.into_iter().fold(self, |spec, arg| spec.arg(arg))
    }

    /// Adds an argument that is passed verbatim but displayed as `shown`.
    pub fn sensitive_arg(mut self, arg: impl Into<String>, shown: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self.shown_args.push(shown.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Shell-quoted, redacted command line for messages and logs.
    pub fn display(&self) -> String {
        let words: Vec<&str> = std::iter::once(self.program.as_str())
            .chain(self.shown_args.iter().map(String::as_str))
            .collect();
        shlex::try_join(words.iter().copied()).unwrap_or_else(|_| words.join(" "))
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandSpec").field(&self.display()).finish()
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub status: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs external commands to completion.
///
/// Implementations must block until the command has exited and its output has
/// been fully captured. A non-zero exit is returned as a normal
/// [`CommandOutput`]; only failing to start the program is an error.
pub trait CommandRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<CommandOutput, SystemError>;
}

/// The real runner, backed by `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<CommandOutput, SystemError> {
        let shown = command.display();
        log::debug!("Running command: {}", shown);

        // Windows shims like `npm.cmd` are not found under their bare name. The
        // shim is spawned directly: std escapes batch-file arguments, whereas
        // a `cmd /C` line would let `&`, `|` or `%` in a password through.
        let output = match capture(StdCommand::new(command.program()).args(command.get_args())) {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound && cfg!(target_os = "windows") => {
                let Some(shim) = batch_shim_name(command.program()) else {
                    return Err(SystemError::CommandFailed { command: shown, source: e });
                };
                log::debug!("Command '{}' not found. Retrying as '{}'.", command.program(), shim);
                capture(StdCommand::new(&shim).args(command.get_args())).map_err(|e| {
                    SystemError::CommandFailed {
                        command: shown.clone(),
                        source: e,
                    }
                })?
            }
            Err(e) => {
                return Err(SystemError::CommandFailed {
                    command: shown,
                    source: e,
                });
            }
        };

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        };
        if !result.success() {
            log::debug!("Command '{}' exited with status {:?}", shown, result.status);
        }
        Ok(result)
    }
}

/// The `.cmd` shim to try for a bare program name. Names that already carry
/// an extension are left alone.
fn batch_shim_name(program: &str) -> Option<String> {
    if Path::new(program).extension().is_some() {
        None
    } else {
        Some(format!("{}.cmd", program))
    }
}

fn capture(command: &mut StdCommand) -> io::Result<Output> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_and_redacts() {
        let spec = CommandSpec::new("git")
            .args(["config", "--global", "http.proxy"])
            .sensitive_arg("bob:p w@h:1", "bob:****@h:1");
        assert_eq!(spec.get_args().last().map(String::as_str), Some("bob:p w@h:1"));
        let shown = spec.display();
        assert!(shown.starts_with("git config --global http.proxy "));
        assert!(shown.contains("bob:****@h:1"));
        assert!(!shown.contains("p w"));
        assert!(!format!("{:?}", spec).contains("p w"));
    }

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let spec = CommandSpec::new("npm").args(["config", "get", "odd value"]);
        let words = shlex::split(&spec.display()).unwrap();
        assert_eq!(words, vec!["npm", "config", "get", "odd value"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_not_an_error() {
        let spec = CommandSpec::new("sh").args(["-c", "echo out; echo err >&2; exit 3"]);
        let output = ProcessRunner.run(&spec).unwrap();
        assert!(!output.success());
        assert_eq!(output.status, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_program_is_command_failed() {
        let spec = CommandSpec::new("easy-proxy-surely-missing-tool").arg("--version");
        let result = ProcessRunner.run(&spec);
        match result {
            Err(SystemError::CommandFailed { command, source }) => {
                assert_eq!(command, "easy-proxy-surely-missing-tool --version");
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_metacharacters_reach_the_program_literally() {
        let secret = "u:p&calc|x^%PATH%@h:1";
        let spec = CommandSpec::new("sh")
            .args(["-c", "printf %s \"$1\"", "sh"])
            .sensitive_arg(secret, "u:****@h:1");
        let output = ProcessRunner.run(&spec).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, secret);
    }

    #[test]
    fn test_batch_shim_name_only_for_bare_programs() {
        assert_eq!(batch_shim_name("npm").as_deref(), Some("npm.cmd"));
        assert_eq!(
            batch_shim_name("C:/nodejs/npm").as_deref(),
            Some("C:/nodejs/npm.cmd")
        );
        assert_eq!(batch_shim_name("npm.cmd"), None);
        assert_eq!(batch_shim_name("git.exe"), None);
    }
}
