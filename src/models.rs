// src/models.rs

use crate::constants::{
    DEFAULT_GIT_PROGRAM, DEFAULT_GRADLE_JVM_ARGS, DEFAULT_NPM_PROGRAM, PASSWORD_MASK,
};
use serde::Deserialize;
use std::fmt;

// --- PROXY PARAMETERS ---

/// The proxy endpoint (and optional credentials) collected during one run.
///
/// Host and port are opaque strings: nothing is parsed or validated. The two
/// constructors are the only way to build a spec, which keeps `user` and
/// `password` empty whenever the proxy is anonymous.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxySpec {
    host: String,
    port: String,
    user: String,
    password: String,
    authenticated: bool,
}

impl ProxySpec {
    /// A proxy that needs no credentials.
    pub fn anonymous(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            user: String::new(),
            password: String::new(),
            authenticated: false,
        }
    }

    /// A proxy that requires a user and password.
    pub fn authenticated(
        host: impl Into<String>,
        port: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            user: user.into(),
            password: password.into(),
            authenticated: true,
        }
    }

    /// The proxy host as typed.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The proxy port as typed. Not parsed.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Empty for an anonymous proxy.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The clear-text password. Only for writing to the chosen target.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether user and password take part in the proxy URL.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The single-string form used by Git and npm:
    /// `user:password@host:port` or `host:port`.
    pub fn proxy_url(&self) -> String {
        self.url_with_password(&self.password)
    }

    /// Same as [`Self::proxy_url`] with the password masked. Use this for anything
    /// that is echoed or logged.
    pub fn redacted_url(&self) -> String {
        self.url_with_password(PASSWORD_MASK)
    }

    /// Masks the credential part of the proxy URL wherever it appears in `text`
    /// (e.g. in the read-back output of `git config`).
    pub fn redact(&self, text: &str) -> String {
        if !self.authenticated || self.password.is_empty() {
            return text.to_string();
        }
        let secret = format!("{}:{}@", self.user, self.password);
        let masked = format!("{}:{}@", self.user, PASSWORD_MASK);
        text.replace(&secret, &masked)
    }

    fn url_with_password(&self, password: &str) -> String {
        if self.authenticated {
            format!("{}:{}@{}:{}", self.user, password, self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

// Never print the password, not even in debug logs.
impl fmt::Debug for ProxySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxySpec")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field(
                "password",
                &if self.password.is_empty() { "" } else { PASSWORD_MASK },
            )
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

// --- MENU SELECTIONS ---

fn is_quit_token(input: &str) -> bool {
    input.eq_ignore_ascii_case("q")
}

/// The top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    /// `1`: proxy with user and password.
    Authenticated,
    /// `2`: proxy without credentials.
    Unauthenticated,
    /// `3`: remove every proxy configuration.
    RemoveAll,
    /// `q` or `Q`.
    Quit,
}

impl MainMenuChoice {
    /// Returns `None` for anything that is not a menu option; callers treat
    /// that as "nothing to do".
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Authenticated),
            "2" => Some(Self::Unauthenticated),
            "3" => Some(Self::RemoveAll),
            other if is_quit_token(other) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The tool ecosystems whose proxy settings can be managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Gradle, through `gradle.properties`.
    BuildTool,
    /// Git, through the global `http.proxy` key.
    VersionControl,
    /// npm, through its `proxy` config value.
    PackageManager,
}

impl Target {
    /// Registry order; `remove_all` visits targets in this order.
    pub const ALL: [Self; 3] = [Self::BuildTool, Self::VersionControl, Self::PackageManager];

    /// The tool's name as shown to the user.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::BuildTool => "Gradle",
            Self::VersionControl => "Git",
            Self::PackageManager => "npm",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The second-level menu, shown once the proxy parameters are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMenuChoice {
    /// `1`, `2` or `3`.
    Target(Target),
    /// `q` or `Q`.
    Quit,
}

impl TargetMenuChoice {
    /// Same rules as [`MainMenuChoice::parse`].
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Target(Target::BuildTool)),
            "2" => Some(Self::Target(Target::VersionControl)),
            "3" => Some(Self::Target(Target::PackageManager)),
            other if is_quit_token(other) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// How an existing `gradle.properties` receives the new block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// The file becomes exactly the new block.
    Overwrite,
    /// The block goes after the existing content.
    Append,
}

impl WriteMode {
    /// Case-insensitive `o`/`overwrite` or `a`/`append`.
    pub fn parse(input: &str) -> Option<Self> {
        let answer = input.trim().to_lowercase();
        match answer.as_str() {
            "o" | "overwrite" => Some(Self::Overwrite),
            "a" | "append" => Some(Self::Append),
            _ => None,
        }
    }
}

/// Existence of the destination file at the moment it is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// Nothing there yet: the block becomes the whole file.
    Absent,
    /// The user is asked whether to overwrite or append.
    Present,
}

impl From<bool> for FileState {
    fn from(exists: bool) -> Self {
        if exists { Self::Present } else { Self::Absent }
    }
}

// --- OUTCOMES ---

/// What one step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// The proxy configuration was written or set.
    Applied,
    /// The proxy configuration was deleted.
    Removed,
    /// Nothing was changed on purpose: the setting was already absent, or the
    /// user declined to write.
    Skipped,
    /// The step failed but the run carries on.
    Failed,
}

/// The result of one apply or remove step. Only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOutcome {
    /// The tool the step touched.
    pub target: Target,
    /// What happened to it.
    pub action: ConfigAction,
    /// One user-facing sentence. Never contains a password.
    pub detail: String,
}

impl ConfigOutcome {
    /// Builds an outcome; the four shorthands below fix `action`.
    pub fn new(target: Target, action: ConfigAction, detail: impl Into<String>) -> Self {
        Self {
            target,
            action,
            detail: detail.into(),
        }
    }

    pub fn applied(target: Target, detail: impl Into<String>) -> Self {
        Self::new(target, ConfigAction::Applied, detail)
    }

    pub fn removed(target: Target, detail: impl Into<String>) -> Self {
        Self::new(target, ConfigAction::Removed, detail)
    }

    pub fn skipped(target: Target, detail: impl Into<String>) -> Self {
        Self::new(target, ConfigAction::Skipped, detail)
    }

    pub fn failed(target: Target, detail: impl Into<String>) -> Self {
        Self::new(target, ConfigAction::Failed, detail)
    }
}

// --- `settings.toml` MODELS ---

/// easy-proxy's own settings. Every field has a default, so the file is optional
/// and may contain only the keys the user wants to change.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Overrides the location of `gradle.properties`. `~` and `$VARS` are expanded.
    pub gradle_properties: Option<String>,
    /// Git executable, `git` by default.
    pub git_program: String,
    /// npm executable, `npm` by default.
    pub npm_program: String,
    /// The `[gradle]` table.
    pub gradle: GradleRuntimeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gradle_properties: None,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            npm_program: DEFAULT_NPM_PROGRAM.to_string(),
            gradle: GradleRuntimeSettings::default(),
        }
    }
}

/// The fixed, non-proxy settings written alongside the Gradle proxy block.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GradleRuntimeSettings {
    /// `org.gradle.daemon`.
    pub daemon: bool,
    /// `org.gradle.parallel`.
    pub parallel: bool,
    /// `org.gradle.jvmargs`.
    pub jvm_args: String,
}

impl Default for GradleRuntimeSettings {
    fn default() -> Self {
        Self {
            daemon: true,
            parallel: true,
            jvm_args: DEFAULT_GRADLE_JVM_ARGS.to_string(),
        }
    }
}
