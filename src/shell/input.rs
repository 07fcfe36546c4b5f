use std::{fmt::Display, io::BufRead, thread::JoinHandle};

use crossbeam_channel::Sender;
use indoc::indoc;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, warn};

use crate::{
    page::{Msg, Target},
    runtime::Event,
};

pub const HELP: &str = indoc! {"
    url <text>              type into the URL field
    fetch [<url>]           press the fetch button (typing <url> first)
    nav <section>           follow a navigation link (home, downloader, about, contact)
    mnav <section>          follow a link of the mobile menu
    menu                    press the mobile menu button
    tap                     click somewhere on the page
    download <n>            press the n-th download button
    music                   press the music download button
    contact <field> <text>  fill a field of the contact form
    send                    submit the contact form
    show                    show the page again
    help                    show this help
    quit                    close the page"};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    BadIndex(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "Unknown command '{cmd}'"),
            CommandError::MissingArgument(arg) => write!(f, "Missing argument <{arg}>"),
            CommandError::BadIndex(idx) => write!(f, "'{idx}' is not a button number"),
        }
    }
}

/// Turn one typed line into the events it stands for
pub fn parse_line(line: &str) -> Result<Vec<Event>, CommandError> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let tap = |target| Event::Page(Msg::Tap(target));
    let arg = |name| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(rest)
        }
    };

    let events = match cmd {
        "" => vec![],
        "url" => vec![Event::Page(Msg::UrlInput(rest.to_string()))],
        "fetch" if rest.is_empty() => vec![tap(Target::FetchButton)],
        "fetch" => vec![
            Event::Page(Msg::UrlInput(rest.to_string())),
            tap(Target::FetchButton),
        ],
        "nav" | "mnav" => vec![tap(Target::NavLink {
            page: arg("section")?.to_string(),
            mobile: cmd == "mnav",
        })],
        "menu" => vec![tap(Target::MenuButton)],
        "tap" => vec![tap(Target::Elsewhere)],
        "download" => {
            let n = arg("n")?;
            match n.parse::<usize>() {
                Ok(n) if n > 0 => vec![tap(Target::DownloadOption(n - 1))],
                _ => return Err(CommandError::BadIndex(n.to_string())),
            }
        }
        "music" => vec![tap(Target::MusicButton)],
        "contact" => {
            let (field, value) = arg("field")?
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            vec![Event::Page(Msg::ContactInput {
                field: field.to_string(),
                value: value.trim().to_string(),
            })]
        }
        "send" => vec![tap(Target::ContactSubmit)],
        "show" => vec![Event::Show],
        "help" => vec![Event::Notice(HELP.to_string())],
        "quit" | "exit" => vec![Event::Quit],
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(events)
}

/// Read commands on a dedicated thread and forward them to the event loop.
///
/// The end of the input closes the page.
pub fn spawn_input<R>(reader: R, events: Sender<Event>) -> Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("Could not read input: {err}");
                        break;
                    }
                };

                let parsed = match parse_line(&line) {
                    Ok(parsed) => parsed,
                    Err(err) => vec![Event::Notice(format!("{err}. Type 'help' for help"))],
                };

                for event in parsed {
                    let quit = matches!(event, Event::Quit);
                    if events.send(event).is_err() || quit {
                        return;
                    }
                }
            }

            debug!("End of input");
            let _ = events.send(Event::Quit);
        })
        .into_diagnostic()
        .wrap_err("Could not spawn input thread")
}
