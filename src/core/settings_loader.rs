// src/core/settings_loader.rs

use crate::{
    core::paths,
    models::Settings,
};
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file '{}' does not exist.", .0.display())]
    Missing(PathBuf),
    #[error("Failed to read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads easy-proxy's settings.
///
/// An explicit path (from `--config`) must exist. Without one, the default
/// location is tried and a missing file simply means "use the defaults". The
/// file is only ever read; easy-proxy never creates it.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        return load_from(path, true);
    }
    match paths::default_settings_path() {
        Ok(path) => load_from(&path, false),
        Err(e) => {
            log::warn!("{}; using default settings.", e);
            Ok(Settings::default())
        }
    }
}

/// Reads and parses one settings file. With `required == false`, a missing
/// file yields the defaults.
pub fn load_from(path: &Path, required: bool) -> Result<Settings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if required {
                return Err(SettingsError::Missing(path.to_path_buf()));
            }
            debug!("No settings file at '{}'; using defaults.", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    debug!("Loading settings from '{}'", path.display());
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
