//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use meshdash::config::Config;

/// Control-plane helper for the local cluster proxy and web dashboard.
#[derive(Debug, Parser)]
#[command(name = "meshdash", version)]
pub struct Args {
    /// Path to config file (default: ./meshdash.toml or ~/.config/meshdash/meshdash.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Namespace the control plane is installed into.
    #[arg(long = "namespace", global = true)]
    pub namespace: Option<String>,

    /// Log filter directive (overridden by RUST_LOG).
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the dashboard in a web browser.
    Dashboard(DashboardArgs),
}

#[derive(Debug, ClapArgs)]
pub struct DashboardArgs {
    /// The port on which to run the proxy, which must not be 0.
    ///
    /// `kubectl proxy` itself accepts 0 for a random port; that is not
    /// supported here because the dashboard URL needs the real port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// kubectl executable to run.
    #[arg(long = "kubectl")]
    pub kubectl: Option<String>,

    /// Print the dashboard URL instead of opening a browser.
    #[arg(long = "no-browser")]
    pub no_browser: bool,
}

impl Args {
    /// Layer command-line flags over a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(namespace) = &self.namespace {
            config.dashboard.namespace = namespace.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_color {
            config.display.color = false;
        }
        match &self.command {
            Command::Dashboard(dashboard) => {
                if let Some(port) = dashboard.port {
                    config.proxy.port = port;
                }
                if let Some(kubectl) = &dashboard.kubectl {
                    config.proxy.kubectl = kubectl.clone();
                }
                if dashboard.no_browser {
                    config.dashboard.open_browser = false;
                }
            }
        }
    }
}
