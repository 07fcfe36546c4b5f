use std::fmt::Debug;

use miette::Result;
use tracing::info;

use super::command::{assert_success_command, Capture};

/// Opens URLs in a new browsing context.
///
/// Calls may block until the opened program exits, callers run them off the event loop.
pub trait UrlOpener: Send + Sync + Debug {
    fn open(&self, url: &str) -> Result<()>;
}

/// The platform program that hands a URL to the default browser
fn default_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Interface for the system URL opener (`xdg-open`, `open`, ...)
#[derive(Debug)]
pub struct SystemOpener {
    program: String,
}

impl SystemOpener {
    /// Use the given program, or the platform default one
    pub fn new(program: Option<String>) -> Self {
        Self {
            program: program.unwrap_or_else(|| default_program().to_string()),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!("Opening {url} with {}", self.program);
        assert_success_command(&self.program, |cmd| cmd.arg(url), Capture::all())
    }
}

/// Only logs the URLs it is asked to open
#[derive(Debug, Default)]
pub struct DryRunOpener;

impl UrlOpener for DryRunOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!("Would open {url}");
        Ok(())
    }
}
