use miette::Report;
use tracing::{debug, error, info, warn};

use crate::{
    result::{Error, RetrievalError, ValidationError},
    types::VideoResult,
    url_pattern::is_tiktok_url,
};

use super::{document::Visibility, messages, render::render_video, Effect, Page};

/// Trim the URL typed by the user and check it is worth a retrieval
pub fn validate_url(input: &str) -> Result<&str, ValidationError> {
    let url = input.trim();

    if url.is_empty() {
        Err(ValidationError::EmptyUrl)
    } else if !is_tiktok_url(url) {
        Err(ValidationError::InvalidUrl)
    } else {
        Ok(url)
    }
}

impl Page {
    /// The fetch control was pressed.
    ///
    /// On a valid URL, switch to the loading state and ask for a retrieval
    /// tagged with a fresh sequence number.
    pub(super) fn fetch(&mut self, effects: &mut Vec<Effect>) {
        let url = match validate_url(&self.doc.url_input) {
            Ok(url) => url.to_string(),
            Err(err) => {
                self.surface(err.into());
                return;
            }
        };

        self.doc.show_loading();
        self.doc.hide_messages();

        self.issued += 1;
        let seq = self.issued;
        info!("Fetching video #{seq} from {url}");
        effects.push(Effect::Retrieve { seq, url });
    }

    /// A retrieval came back.
    ///
    /// Only the latest issued retrieval may touch the page, older ones are dropped.
    pub(super) fn retrieved(&mut self, seq: u64, outcome: Result<VideoResult, RetrievalError>) {
        if seq != self.issued {
            warn!(
                "Discarding result of fetch #{seq}, fetch #{} is more recent",
                self.issued
            );
            return;
        }

        match outcome {
            Ok(video) => {
                info!("Fetch #{seq} resolved: '{}'", video.title);
                render_video(&mut self.doc, &video);
                self.current_video = Some(video);
                self.doc.hide_loading();
                self.doc.show_result();
            }
            Err(err) => {
                self.doc.hide_loading();
                self.surface(err.into());
            }
        }
    }

    /// Show an error to the user, keeping internal details in the logs
    fn surface(&mut self, err: Error) {
        let message = err.user_message();
        if let Error::Retrieval(_) = err {
            error!("Retrieval failed: {:?}", Report::from(err));
        }
        self.doc.show_error(message);
    }

    /// Download controls only exist while the result container is displayed
    fn result_controls_shown(&self) -> bool {
        let shown = self.doc.is_visible(Visibility::RESULT);
        if !shown {
            debug!("Result is hidden, ignoring the tap");
        }
        shown
    }

    /// A download option was pressed
    pub(super) fn download(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if !self.result_controls_shown() {
            return;
        }

        let Some(option) = self.doc.download_options.get(index) else {
            warn!("No download option #{}", index + 1);
            return;
        };

        effects.push(Effect::OpenUrl(option.url.clone()));
        self.doc.show_success(messages::DOWNLOAD_STARTED);
    }

    /// The music control was pressed. Does nothing before the first result.
    pub(super) fn download_music(&mut self, effects: &mut Vec<Effect>) {
        if !self.result_controls_shown() {
            return;
        }

        let Some(url) = self.current_video.as_ref().map(|v| v.music.url.clone()) else {
            warn!("No music to download yet");
            return;
        };

        effects.push(Effect::OpenUrl(url));
        self.doc.show_success(messages::MUSIC_DOWNLOAD_STARTED);
    }
}
