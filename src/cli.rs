use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

macro_rules! arg_env {
    ($v:literal) => {
        concat!("TTDL_", $v)
    };
}

/// A single-page TikTok downloader, in your terminal.
/// Paste a URL, look at the video, pick a download.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// A TikTok URL to fetch as soon as the page is loaded
    pub url: Option<String>,

    /// The path to a TOML configuration file
    #[arg(long, env=arg_env!("CONFIG"))]
    pub config: Option<PathBuf>,

    /// How long the simulated retrieval takes, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// The program used to open download links
    #[arg(long)]
    pub opener: Option<String>,

    /// Log download links instead of opening them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colors in the rendered page and the logs
    #[arg(long)]
    pub no_color: bool,

    /// The maximum level of the logs (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Override the loaded settings with the options given on the command line
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(delay_ms) = self.delay_ms {
            settings.retrieval.delay_ms = delay_ms;
        }
        if let Some(opener) = &self.opener {
            settings.browser.opener = Some(opener.clone());
        }
        if self.dry_run {
            settings.browser.dry_run = true;
        }
        if self.no_color {
            settings.ui.color = false;
        }
        if let Some(level) = &self.log_level {
            settings.log.level = level.clone();
        }
    }
}
