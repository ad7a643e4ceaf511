// src/core/paths.rs

use crate::{
    constants::{
        APP_CONFIG_DIR, GRADLE_DIR, GRADLE_PROPERTIES_FILENAME, GRADLE_USER_HOME_ENV,
        SETTINGS_FILENAME,
    },
    models::Settings,
};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find the user's home directory.")]
    HomeDirNotFound,
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Failed to expand path template '{template}': {message}")]
    Expansion { template: String, message: String },
}

/// Returns the path of the `gradle.properties` file this run manages.
///
/// Precedence: the `--gradle-properties` flag, the `gradle_properties` setting,
/// `$GRADLE_USER_HOME/gradle.properties`, then `~/.gradle/gradle.properties`.
pub fn resolve_gradle_properties_path(
    cli_override: Option<&str>,
    settings: &Settings,
) -> Result<PathBuf, PathError> {
    gradle_properties_path_from(
        cli_override.or(settings.gradle_properties.as_deref()),
        env::var_os(GRADLE_USER_HOME_ENV),
        dirs::home_dir(),
    )
}

/// The pure part of [`resolve_gradle_properties_path`], with the environment
/// passed in explicitly.
pub fn gradle_properties_path_from(
    override_template: Option<&str>,
    gradle_user_home: Option<OsString>,
    home_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    let path = if let Some(template) = override_template {
        expand_path(template)?
    } else if let Some(gradle_home) = gradle_user_home.filter(|dir| !dir.is_empty()) {
        PathBuf::from(gradle_home).join(GRADLE_PROPERTIES_FILENAME)
    } else {
        home_dir
            .ok_or(PathError::HomeDirNotFound)?
            .join(GRADLE_DIR)
            .join(GRADLE_PROPERTIES_FILENAME)
    };

    Ok(dunce::simplified(&path).to_path_buf())
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path.
pub fn expand_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Returns the default location of easy-proxy's settings file
/// (`~/.config/easy-proxy/settings.toml` on Linux). The file may not exist.
pub fn default_settings_path() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)
        .map(|dir| dir.join(APP_CONFIG_DIR).join(SETTINGS_FILENAME))
}
