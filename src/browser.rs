//! Browser launching through the platform URL opener.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::BrowserError;

/// Hands URLs to something that can display them.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Opens URLs in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

#[async_trait]
impl UrlOpener for SystemBrowser {
    async fn open(&self, url: &str) -> Result<(), BrowserError> {
        open_url(url).await
    }
}

/// Open `url` in the default browser and wait for the opener to finish.
pub async fn open_url(url: &str) -> Result<(), BrowserError> {
    let (program, leading) = platform_opener().ok_or(BrowserError::Unsupported)?;
    run_opener(program, leading, url).await
}

/// Opener executable plus the arguments that precede the URL.
pub fn platform_opener() -> Option<(&'static str, &'static [&'static str])> {
    #[cfg(target_os = "macos")]
    {
        const ARGS: &[&str] = &[];
        return Some(("open", ARGS));
    }
    #[cfg(target_os = "windows")]
    {
        // The empty string is the window title consumed by `start`.
        const ARGS: &[&str] = &["/C", "start", ""];
        return Some(("cmd", ARGS));
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        const ARGS: &[&str] = &[];
        return Some(("xdg-open", ARGS));
    }
    #[allow(unreachable_code)]
    None
}

pub(crate) async fn run_opener(
    program: &str,
    leading: &[&str],
    url: &str,
) -> Result<(), BrowserError> {
    tracing::debug!(program, url, "opening browser");
    let status = Command::new(program)
        .args(leading)
        .arg(url)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|source| BrowserError::Launch {
            opener: program.to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(BrowserError::Status {
            opener: program.to_string(),
            status,
        })
    }
}
