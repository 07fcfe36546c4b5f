mod cli;
mod config;
mod logging;
mod outside;
mod page;
mod result;
mod runtime;
mod shell;
mod source;
mod types;
mod url_pattern;

use std::{io::BufReader, sync::Arc};

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};

use crate::{
    cli::Args,
    config::Settings,
    outside::{DryRunOpener, SystemOpener, UrlOpener},
    page::{Msg, Target},
    runtime::{Event, Runtime},
    shell::{spawn_input, TerminalView},
    source::MockSource,
};

fn main() -> Result<()> {
    // Initialize the configuration & CLI
    let args = Args::parse();
    let mut settings =
        Settings::load(args.config.as_deref()).wrap_err("Could not load the configuration")?;
    args.apply(&mut settings);

    logging::init_logging(settings.log.level()?, settings.ui.color)?;
    debug!("Settings: {settings:?}");

    let source = MockSource::new(settings.retrieval.delay(), settings.retrieval.failure_rate);
    let opener = load_opener(&settings);
    let runtime = Runtime::new(Arc::new(source), opener);

    // Fetch the URL given on the command line like if it was typed in
    if let Some(url) = args.url {
        let events = runtime.sender();
        for msg in [Msg::UrlInput(url), Msg::Tap(Target::FetchButton)] {
            events
                .send(Event::Page(msg))
                .into_diagnostic()
                .wrap_err("Could not queue the initial fetch")?;
        }
    }

    spawn_input(BufReader::new(std::io::stdin()), runtime.sender())?;
    info!("Page loaded. Type 'help' for the list of commands");

    let mut view = TerminalView::new(std::io::stdout(), settings.ui.color);
    runtime.run(&mut view)
}

fn load_opener(settings: &Settings) -> Arc<dyn UrlOpener> {
    if settings.browser.dry_run {
        Arc::new(DryRunOpener)
    } else {
        let opener = SystemOpener::new(settings.browser.opener.clone());
        debug!("Opening links with {}", opener.program());
        Arc::new(opener)
    }
}
