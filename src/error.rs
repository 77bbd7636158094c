//! Unified error types for the dashboard launcher.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

// ---------------------------------------------------------------------------
// SupervisorError
// ---------------------------------------------------------------------------

/// Errors from starting or monitoring a supervised process.
///
/// `EmptyProgram` and `Spawn` are spawn failures and are returned
/// synchronously by `ProcessSupervisor::start`. The remaining variants are
/// exit failures and only ever arrive through the completion notification.
#[derive(Debug)]
pub enum SupervisorError {
    /// No executable name was given.
    EmptyProgram,
    /// The OS refused to create the process.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The process ran and exited unsuccessfully.
    Exit { program: String, status: ExitStatus },
    /// Waiting on the process handle failed.
    Wait {
        program: String,
        source: std::io::Error,
    },
    /// The monitoring task went away without reporting (runtime shutdown).
    MonitorLost { program: String },
}

impl SupervisorError {
    /// True for errors raised before a process existed.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::EmptyProgram | Self::Spawn { .. })
    }
}

impl fmt::Display for SupervisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyProgram => write!(f, "failed to spawn: empty program name"),
            Self::Spawn { program, source } => write!(f, "failed to spawn `{program}`: {source}"),
            Self::Exit { program, status } => {
                write!(f, "`{program}` {}", describe_exit_status(status))
            }
            Self::Wait { program, source } => {
                write!(f, "failed waiting for `{program}`: {source}")
            }
            Self::MonitorLost { program } => {
                write!(f, "lost track of `{program}` before it reported an exit")
            }
        }
    }
}

impl std::error::Error for SupervisorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } | Self::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Human-readable exit description, e.g. `exited with status 1`.
pub(crate) fn describe_exit_status(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exited with status {code}");
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("terminated by signal {signal}");
        }
    }
    "exited abnormally".to_string()
}

// ---------------------------------------------------------------------------
// KubectlError
// ---------------------------------------------------------------------------

/// Errors from driving `kubectl proxy` and building URLs against it.
#[derive(Debug)]
pub enum KubectlError {
    Supervisor(SupervisorError),
    /// `start_proxy` was called twice on the same launcher.
    ProxyAlreadyRunning(u16),
    /// URLs are relative to a running proxy.
    ProxyNotRunning,
    /// Namespaces must be DNS-1123 labels.
    InvalidNamespace(String),
    /// URL paths must start with `/`.
    InvalidPath(String),
    InvalidUrl { url: String, source: url::ParseError },
}

impl fmt::Display for KubectlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supervisor(e) => write!(f, "{e}"),
            Self::ProxyAlreadyRunning(port) => {
                write!(f, "kubectl proxy already running on port [{port}]")
            }
            Self::ProxyNotRunning => {
                write!(f, "proxy needs to be started before generating URLs")
            }
            Self::InvalidNamespace(ns) => write!(
                f,
                "namespace must be a lowercase DNS label of at most 63 characters, was [{ns}]"
            ),
            Self::InvalidPath(path) => write!(f, "path must start with a [/], was [{path}]"),
            Self::InvalidUrl { url, source } => write!(f, "invalid url [{url}]: {source}"),
        }
    }
}

impl std::error::Error for KubectlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Supervisor(e) => Some(e),
            Self::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SupervisorError> for KubectlError {
    fn from(e: SupervisorError) -> Self {
        Self::Supervisor(e)
    }
}

// ---------------------------------------------------------------------------
// BrowserError
// ---------------------------------------------------------------------------

/// Errors from handing a URL to the platform opener.
#[derive(Debug)]
pub enum BrowserError {
    Launch {
        opener: String,
        source: std::io::Error,
    },
    Status { opener: String, status: ExitStatus },
    Unsupported,
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch { opener, source } => write!(f, "failed to run `{opener}`: {source}"),
            Self::Status { opener, status } => {
                write!(f, "`{opener}` {}", describe_exit_status(status))
            }
            Self::Unsupported => write!(f, "no known browser opener for this platform"),
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Launch { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// DashboardError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the `dashboard` command.
#[derive(Debug)]
pub enum DashboardError {
    /// Port 0 (random port) is not supported.
    InvalidPort(u16),
    StartProxy(KubectlError),
    Url(KubectlError),
    OpenBrowser { url: String, source: BrowserError },
    /// The proxy exited unsuccessfully after it was started.
    Proxy(SupervisorError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(port) => write!(f, "port must be positive, was {port}"),
            Self::StartProxy(e) => write!(f, "failed to start kubectl proxy: {e}"),
            Self::Url(e) => write!(f, "failed to generate URL for dashboard: {e}"),
            Self::OpenBrowser { url, source } => {
                write!(f, "failed to open URL {url} in the default browser: {source}")
            }
            Self::Proxy(e) => write!(f, "error running proxy via kubectl: {e}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPort(_) => None,
            Self::StartProxy(e) | Self::Url(e) => Some(e),
            Self::OpenBrowser { source, .. } => Some(source),
            Self::Proxy(e) => Some(e),
        }
    }
}
