// src/system/error.rs

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by the file store and the command runner.
///
/// The set is closed on purpose: configurators match it exhaustively to decide
/// between "already absent", "report and continue" and nothing else.
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("'{}' does not exist.", .path.display())]
    NotFound { path: PathBuf },
    #[error("Permission denied for '{}': {source}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Command '{command}' could not be executed: {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error on '{}': {source}", .path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Maps a raw I/O error on `path` into the closed taxonomy.
pub fn classify_io_error(error: io::Error, path: &Path) -> SystemError {
    let path = path.to_path_buf();
    match error.kind() {
        io::ErrorKind::NotFound => SystemError::NotFound { path },
        io::ErrorKind::PermissionDenied => SystemError::PermissionDenied {
            path,
            source: error,
        },
        _ => SystemError::Other {
            path,
            source: error,
        },
    }
}
