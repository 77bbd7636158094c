//! The `dashboard` command: start the proxy, open the dashboard, wait.
//!
//! The browser is opened as soon as the URL is known. Nothing checks that
//! the proxy has bound its port first, so a slow proxy can lose that race
//! and the first page load fails until it is up.

use std::future::Future;

use crate::browser::UrlOpener;
use crate::config::Config;
use crate::error::DashboardError;
use crate::kubectl::ProxyLauncher;
use crate::render::RenderSink;

/// Explicit inputs for one `dashboard` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub port: u16,
    pub namespace: String,
    /// Service path below the namespace.
    pub path: String,
    pub open_browser: bool,
}

impl DashboardOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            port: config.proxy.port,
            namespace: config.dashboard.namespace.clone(),
            path: config.dashboard.path.clone(),
            open_browser: config.dashboard.open_browser,
        }
    }
}

/// Run the command until the proxy exits or the user presses Ctrl-C.
pub async fn run_dashboard<L, O, R>(
    options: &DashboardOptions,
    launcher: &mut L,
    opener: &O,
    sink: &R,
) -> Result<(), DashboardError>
where
    L: ProxyLauncher + ?Sized,
    O: UrlOpener + ?Sized,
    R: RenderSink + ?Sized,
{
    let interrupt = interrupted(tokio::signal::ctrl_c(), sink);
    run_dashboard_until(options, launcher, opener, sink, interrupt).await
}

/// Same as [`run_dashboard`], stopping early when `interrupt` completes.
pub async fn run_dashboard_until<L, O, R, F>(
    options: &DashboardOptions,
    launcher: &mut L,
    opener: &O,
    sink: &R,
    interrupt: F,
) -> Result<(), DashboardError>
where
    L: ProxyLauncher + ?Sized,
    O: UrlOpener + ?Sized,
    R: RenderSink + ?Sized,
    F: Future<Output = ()>,
{
    if options.port == 0 {
        return Err(DashboardError::InvalidPort(options.port));
    }

    let proxy = launcher
        .start_proxy(options.port)
        .map_err(DashboardError::StartProxy)?;
    tracing::debug!(program = proxy.program(), pid = ?proxy.id(), "proxy started");

    let url = launcher
        .url_for(&options.namespace, &options.path)
        .map_err(DashboardError::Url)?;

    if options.open_browser {
        sink.status(&format!("Opening [{url}] in the default browser"));
        opener
            .open(url.as_str())
            .await
            .map_err(|source| DashboardError::OpenBrowser {
                url: url.to_string(),
                source,
            })?;
    } else {
        sink.status(&format!("Dashboard available at [{url}]"));
    }

    tokio::select! {
        outcome = proxy.wait() => outcome.map_err(DashboardError::Proxy),
        () = interrupt => {
            tracing::info!("interrupted, no longer waiting on proxy");
            Ok(())
        }
    }
}

/// Resolve when `signal` fires. If the listener cannot be installed, warn
/// and never resolve, leaving the proxy exit as the only way out.
async fn interrupted<S, R>(signal: S, sink: &R)
where
    S: Future<Output = std::io::Result<()>>,
    R: RenderSink + ?Sized,
{
    if let Err(e) = signal.await {
        sink.warn(&format!("Ctrl-C will not stop the dashboard: {e}"));
        std::future::pending::<()>().await;
    }
}
