//! meshdash — opens a cluster control plane's web dashboard through a local
//! `kubectl proxy`.
//!
//! The reusable piece is [`supervisor`]: start an external process, get a
//! handle back immediately, and later receive exactly one exit outcome.
//!
//! # Quick start
//!
//! ```no_run
//! use meshdash::supervisor::ProcessSupervisor;
//!
//! # async fn example() {
//! let proxy = ProcessSupervisor::new()
//!     .start("kubectl", ["proxy", "-p", "8001"])
//!     .expect("kubectl should spawn");
//! // ... do other work while the proxy runs ...
//! if let Err(e) = proxy.wait().await {
//!     eprintln!("proxy failed: {e}");
//! }
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod kubectl;
pub mod logging;
pub mod render;
pub mod supervisor;
