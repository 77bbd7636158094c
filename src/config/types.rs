//! Configuration data model.
//!
//! Every section derives `Deserialize` with `#[serde(default)]` so partial
//! files fill the gaps from built-in defaults.

use serde::Deserialize;

use super::defaults::{
    DEFAULT_DASHBOARD_PATH, DEFAULT_KUBECTL, DEFAULT_LOG_LEVEL, DEFAULT_NAMESPACE,
    DEFAULT_PROXY_PORT,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub proxy: ProxyConfig,
    pub dashboard: DashboardConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Local API proxy settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProxyConfig {
    /// Port `kubectl proxy` listens on. Zero is rejected at run time.
    pub port: u16,
    /// Executable name or path for `kubectl`.
    pub kubectl: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PROXY_PORT,
            kubectl: DEFAULT_KUBECTL.to_string(),
        }
    }
}

/// Where the dashboard lives and whether to open it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    pub namespace: String,
    /// Service path below the namespace; must start with `/`.
    pub path: String,
    pub open_browser: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: DEFAULT_DASHBOARD_PATH.to_string(),
            open_browser: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `info` or `meshdash=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
