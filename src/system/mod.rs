//! # System Interaction Layer
//!
//! The thin capabilities the configurators and the orchestrator call through.
//! Each one is a trait with a single production implementation, so the decision
//! logic above it can run against in-memory doubles.
//!
//! ## Modules
//!
//! - **`error`**: The closed `SystemError` taxonomy shared by the store and the
//!   runner, plus the one helper that classifies raw I/O errors into it.
//! - **`executor`**: Runs an external program to completion and captures its
//!   output. A non-zero exit is data, not an error.
//! - **`config_store`**: Existence check, read, overwrite, append and delete of a
//!   single configuration file.
//! - **`prompt`**: Line-oriented questions to the user, either through
//!   `dialoguer` on a terminal or over any buffered reader.

pub mod config_store;
pub mod error;
pub mod executor;
pub mod prompt;

#[cfg(test)]
pub(crate) mod testing;
