//! Terminal output for status, warning, and error lines.
//!
//! `RenderSink` is the contract consumed by command handlers; `Renderer` is
//! the default terminal implementation and tests substitute a recorder.

use crossterm::style::{Color, Stylize};

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink: Send + Sync {
    /// Render a user-facing status line on stdout.
    fn status(&self, msg: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

/// Plain or colored terminal renderer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a status line (to stdout).
    pub fn status(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print a warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    /// Print an error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}

impl RenderSink for Renderer {
    fn status(&self, msg: &str) {
        Renderer::status(self, msg);
    }

    fn warn(&self, msg: &str) {
        Renderer::warn(self, msg);
    }

    fn error(&self, msg: &str) {
        Renderer::error(self, msg);
    }
}
