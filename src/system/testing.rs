// src/system/testing.rs
//
// In-memory doubles for the system capabilities, shared by the unit tests of
// the configurators and the orchestrator.

use super::{
    config_store::ConfigStore,
    error::{SystemError, classify_io_error},
    executor::{CommandOutput, CommandRunner, CommandSpec},
    prompt::{PromptError, PromptSource},
};
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

/// What a scripted command does when it is run.
#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Output(CommandOutput),
    SpawnFailure,
}

impl Scripted {
    pub(crate) fn exit(status: i32, stdout: &str, stderr: &str) -> Self {
        Self::Output(CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            status: Some(status),
        })
    }
}

/// Records every command it is asked to run. Commands whose real command line
/// starts with a registered prefix get the scripted response; everything else
/// succeeds with empty output.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    invocations: Vec<String>,
    responses: Vec<(String, Scripted)>,
    all_spawns_fail: bool,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every spawn fails, as if neither tool were installed.
    pub(crate) fn without_tools() -> Self {
        Self {
            all_spawns_fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn respond(mut self, prefix: &str, response: Scripted) -> Self {
        self.responses.push((prefix.to_string(), response));
        self
    }

    /// The unredacted command lines, in the order they ran.
    pub(crate) fn invocations(&self) -> &[String] {
        &self.invocations
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<CommandOutput, SystemError> {
        let line = std::iter::once(command.program())
            .chain(command.get_args().iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        self.invocations.push(line.clone());

        let scripted = if self.all_spawns_fail {
            Some(Scripted::SpawnFailure)
        } else {
            self.responses
                .iter()
                .find(|(prefix, _)| line.starts_with(prefix.as_str()))
                .map(|(_, response)| response.clone())
        };

        match scripted {
            Some(Scripted::SpawnFailure) => Err(SystemError::CommandFailed {
                command: command.display(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            }),
            Some(Scripted::Output(output)) => Ok(output),
            None => Ok(CommandOutput {
                status: Some(0),
                ..CommandOutput::default()
            }),
        }
    }
}

/// A single in-memory file. `fail_with` makes every operation fail with that
/// I/O error kind.
#[derive(Debug)]
pub(crate) struct MemoryStore {
    path: PathBuf,
    pub(crate) content: Option<String>,
    pub(crate) fail_with: Option<io::ErrorKind>,
    pub(crate) delete_calls: usize,
    pub(crate) write_calls: usize,
}

impl MemoryStore {
    pub(crate) fn absent() -> Self {
        Self {
            path: PathBuf::from("/home/tester/.gradle/gradle.properties"),
            content: None,
            fail_with: None,
            delete_calls: 0,
            write_calls: 0,
        }
    }

    pub(crate) fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Self::absent()
        }
    }

    pub(crate) fn failing(kind: io::ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::absent()
        }
    }

    fn check(&self) -> Result<(), SystemError> {
        match self.fail_with {
            Some(kind) => Err(classify_io_error(io::Error::from(kind), &self.path)),
            None => Ok(()),
        }
    }

    fn not_found(&self) -> SystemError {
        SystemError::NotFound {
            path: self.path.clone(),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&mut self) -> Result<bool, SystemError> {
        self.check()?;
        Ok(self.content.is_some())
    }

    fn read(&mut self) -> Result<String, SystemError> {
        self.check()?;
        self.content.clone().ok_or_else(|| self.not_found())
    }

    fn write(&mut self, content: &str) -> Result<(), SystemError> {
        self.write_calls += 1;
        self.check()?;
        self.content = Some(content.to_string());
        Ok(())
    }

    fn append(&mut self, content: &str) -> Result<(), SystemError> {
        self.write_calls += 1;
        self.check()?;
        let mut current = self.content.take().unwrap_or_default();
        current.push_str(content);
        self.content = Some(current);
        Ok(())
    }

    fn delete(&mut self) -> Result<(), SystemError> {
        self.delete_calls += 1;
        self.check()?;
        match self.content.take() {
            Some(_) => Ok(()),
            None => Err(self.not_found()),
        }
    }
}

/// Answers questions from a fixed script and runs dry afterwards.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub(crate) questions: Vec<String>,
    pub(crate) secret_questions: usize,
    pub(crate) close_calls: usize,
}

impl ScriptedPrompt {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromptSource for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        if self.close_calls > 0 {
            return Err(PromptError::Closed);
        }
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }

    fn ask_secret(&mut self, question: &str) -> Result<String, PromptError> {
        self.secret_questions += 1;
        self.ask(question)
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}
