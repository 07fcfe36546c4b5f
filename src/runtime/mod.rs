//! The event loop.
//!
//! A single thread owns the [Page] and handles [Event]s one at a time.
//! Other threads (stdin reader, retrieval workers) only ever talk to it
//! through the event channel.

mod opening;
mod retrieval;

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};

use crate::{
    outside::UrlOpener,
    page::{Document, Effect, Msg, Page},
    source::VideoSource,
    types::Section,
};

#[derive(Debug)]
pub enum Event {
    /// Something for the page to handle
    Page(Msg),
    /// Render the page again
    Show,
    /// A message for the user that is not part of the page
    Notice(String),
    /// Close the page and stop the loop
    Quit,
}

/// The visible side of the page
pub trait PageView {
    fn render(&mut self, doc: &Document) -> Result<()>;

    /// Scroll smoothly to the top of a section
    fn scroll_to(&mut self, section: Section) -> Result<()>;

    fn notice(&mut self, text: &str) -> Result<()>;
}

pub struct Runtime {
    page: Page,
    source: Arc<dyn VideoSource>,
    opener: Arc<dyn UrlOpener>,

    sender: Sender<Event>,
    receiver: Receiver<Event>,

    /// Effects requested while mounting the page, applied when the loop starts
    mounted: Vec<Effect>,
}

impl Runtime {
    pub fn new(source: Arc<dyn VideoSource>, opener: Arc<dyn UrlOpener>) -> Self {
        let (sender, receiver) = unbounded();
        let (page, mounted) = Page::mount();

        Self {
            page,
            source,
            opener,
            sender,
            receiver,
            mounted,
        }
    }

    /// A handle for sending events to the loop from another thread
    pub fn sender(&self) -> Sender<Event> {
        self.sender.clone()
    }

    /// Apply the mount effects and show the page for the first time
    pub fn start(&mut self, view: &mut dyn PageView) -> Result<()> {
        let mounted = std::mem::take(&mut self.mounted);
        self.apply(mounted, view)?;
        view.render(self.page.document())
    }

    /// Handle events until [Event::Quit]
    pub fn run(mut self, view: &mut dyn PageView) -> Result<()> {
        self.start(view)?;

        loop {
            let event = self
                .receiver
                .recv()
                .into_diagnostic()
                .wrap_err("Event channel closed")?;

            if !self.handle(event, view)? {
                break;
            }
        }

        self.page.unmount();
        info!("Page closed");
        Ok(())
    }

    /// Handle one event. Return false once the page is closed.
    pub fn handle(&mut self, event: Event, view: &mut dyn PageView) -> Result<bool> {
        debug!("Event: {event:?}");

        match event {
            Event::Page(msg) => {
                let effects = self.page.update(msg);
                self.apply(effects, view)?;
                view.render(self.page.document())?;
            }
            Event::Show => view.render(self.page.document())?,
            Event::Notice(text) => view.notice(&text)?,
            Event::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn apply(&mut self, effects: Vec<Effect>, view: &mut dyn PageView) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Retrieve { seq, url } => {
                    retrieval::spawn(seq, url, self.source.clone(), self.sender.clone())
                }
                Effect::OpenUrl(url) => opening::spawn(url, self.opener.clone()),
                Effect::ScrollTo(section) => view.scroll_to(section)?,
            }
        }

        Ok(())
    }
}
