// src/system/prompt.rs

use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// Nothing more can be read: EOF on stdin, Ctrl+C on a terminal, or the
    /// source was already closed.
    #[error("The input stream was closed.")]
    Closed,
    #[error("Failed to read input: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for PromptError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => Self::Closed,
            _ => Self::Io(error),
        }
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(error: dialoguer::Error) -> Self {
        match error {
            dialoguer::Error::IO(e) => e.into(),
            #[allow(unreachable_patterns)]
            other => Self::Io(io::Error::other(other.to_string())),
        }
    }
}

/// Asks the user one question at a time and blocks until a line is entered.
pub trait PromptSource {
    /// Returns the entered line without its line terminator.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;

    /// Like [`Self::ask`], but the answer should not be echoed when the source
    /// supports it.
    fn ask_secret(&mut self, question: &str) -> Result<String, PromptError> {
        self.ask(question)
    }

    /// Releases the underlying input. Later calls to `ask` fail with
    /// [`PromptError::Closed`].
    fn close(&mut self) {}
}

/// Interactive prompts on a real terminal, rendered by `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompt {
    closed: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PromptSource for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        if self.closed {
            return Err(PromptError::Closed);
        }
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn ask_secret(&mut self, question: &str) -> Result<String, PromptError> {
        if self.closed {
            return Err(PromptError::Closed);
        }
        let answer = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty_password(true)
            .interact()?;
        Ok(answer)
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Plain line prompts over any reader/writer pair.
///
/// Used when stdin is not a terminal (answers piped in) and under `--plain`.
/// Secrets are read like any other line.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Gives back the writer, e.g. to inspect what was asked in tests.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSource for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        if self.closed {
            return Err(PromptError::Closed);
        }
        write!(self.writer, "{}: ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            log::debug!("Input stream reached EOF while asking '{}'", question);
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn close(&mut self) {
        if !self.closed {
            log::trace!("Closing line prompt.");
            let _ = self.writer.flush();
            self.closed = true;
        }
    }
}
