// src/system/config_store.rs

use super::error::{SystemError, classify_io_error};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Primitive operations on one well-known configuration file.
///
/// A missing file is always reported as [`SystemError::NotFound`], never folded
/// into the other variants, so callers can treat it as "already absent".
pub trait ConfigStore {
    /// The file this store manages. Used in user-facing messages.
    fn location(&self) -> &Path;
    /// Checks for the file without reading it.
    fn exists(&mut self) -> Result<bool, SystemError>;
    /// The whole content as UTF-8.
    fn read(&mut self) -> Result<String, SystemError>;
    /// Replaces the whole content, creating the file if needed.
    fn write(&mut self, content: &str) -> Result<(), SystemError>;
    /// Adds `content` at the end, creating the file if needed.
    fn append(&mut self, content: &str) -> Result<(), SystemError>;
    /// Removes the file; `NotFound` when it was not there.
    fn delete(&mut self) -> Result<(), SystemError>;
}

/// A [`ConfigStore`] backed by a real file.
///
/// Missing parent directories are created before writing: a user who has never
/// run Gradle has no `~/.gradle` yet.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// A store for `path`. Nothing is touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<(), SystemError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| classify_io_error(e, parent))
            }
            _ => Ok(()),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&mut self) -> Result<bool, SystemError> {
        self.path
            .try_exists()
            .map_err(|e| classify_io_error(e, &self.path))
    }

    fn read(&mut self) -> Result<String, SystemError> {
        fs::read_to_string(&self.path).map_err(|e| classify_io_error(e, &self.path))
    }

    fn write(&mut self, content: &str) -> Result<(), SystemError> {
        self.ensure_parent_dir()?;
        log::debug!("Writing {} bytes to '{}'", content.len(), self.path.display());
        fs::write(&self.path, content).map_err(|e| classify_io_error(e, &self.path))
    }

    fn append(&mut self, content: &str) -> Result<(), SystemError> {
        self.ensure_parent_dir()?;
        log::debug!("Appending {} bytes to '{}'", content.len(), self.path.display());
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|e| classify_io_error(e, &self.path))
    }

    fn delete(&mut self) -> Result<(), SystemError> {
        log::debug!("Deleting '{}'", self.path.display());
        fs::remove_file(&self.path).map_err(|e| classify_io_error(e, &self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileConfigStore {
        FileConfigStore::new(dir.path().join("gradle.properties"))
    }

    #[test]
    fn test_write_then_read_and_exists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(!store.exists().unwrap());

        store.write("a=1\n").unwrap();
        assert!(store.exists().unwrap());
        assert_eq!(store.read().unwrap(), "a=1\n");

        store.write("b=2\n").unwrap();
        assert_eq!(store.read().unwrap(), "b=2\n");
    }

    #[test]
    fn test_append_creates_and_concatenates() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.append("a=1\n").unwrap();
        store.append("b=2\n").unwrap();
        assert_eq!(store.read().unwrap(), "a=1\nb=2\n");
    }

    #[test]
    fn test_write_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join(".gradle").join("nested").join("gradle.properties");
        let mut store = FileConfigStore::new(&nested);
        store.write("x=y\n").unwrap();
        assert_eq!(fs::read_to_string(nested).unwrap(), "x=y\n");
    }

    #[test]
    fn test_delete_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        match store.delete() {
            Err(SystemError::NotFound { path }) => assert_eq!(path, store.location()),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_existing_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.write("a=1\n").unwrap();
        store.delete().unwrap();
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(matches!(store.read(), Err(SystemError::NotFound { .. })));
    }
}
