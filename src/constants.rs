// src/constants.rs

/// The directory Gradle uses for per-user state when `GRADLE_USER_HOME` is not set.
pub const GRADLE_DIR: &str = ".gradle";

/// The per-user Gradle settings file that receives the proxy block.
pub const GRADLE_PROPERTIES_FILENAME: &str = "gradle.properties";

/// Environment variable Gradle consults for its user home.
pub const GRADLE_USER_HOME_ENV: &str = "GRADLE_USER_HOME";

/// The name of the directory holding easy-proxy's own settings (in the system config dir).
pub const APP_CONFIG_DIR: &str = "easy-proxy";

/// The optional, read-only settings file (inside `APP_CONFIG_DIR`).
pub const SETTINGS_FILENAME: &str = "settings.toml";

pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_NPM_PROGRAM: &str = "npm";

/// Heap hint written as `org.gradle.jvmargs` unless overridden.
pub const DEFAULT_GRADLE_JVM_ARGS: &str = "-Xmx1536m";

/// Exit status `git config --unset` returns when the key does not exist.
pub const GIT_UNSET_MISSING_KEY_STATUS: i32 = 5;

/// Replacement shown wherever a proxy password would otherwise be printed or logged.
pub const PASSWORD_MASK: &str = "****";
