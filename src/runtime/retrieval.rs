use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::{debug, error};

use crate::{page::Msg, result::RetrievalError, source::VideoSource};

use super::Event;

/// Run one retrieval on its own worker thread.
///
/// The worker owns no page state: once the source answers, the outcome is
/// posted back to the event loop tagged with its sequence number.
pub fn spawn(seq: u64, url: String, source: Arc<dyn VideoSource>, events: Sender<Event>) {
    let worker_events = events.clone();
    let spawned = std::thread::Builder::new()
        .name(format!("retrieval-{seq}"))
        .spawn(move || {
            debug!("Worker started for fetch #{seq}");
            let outcome = source.retrieve(&url);

            if worker_events
                .send(Event::Page(Msg::Retrieved { seq, outcome }))
                .is_err()
            {
                debug!("Page closed before fetch #{seq} resolved");
            }
        });

    if let Err(err) = spawned {
        error!("Could not spawn retrieval worker: {err}");
        let outcome = Err(RetrievalError::Worker(err.to_string()));
        // The loop owns the receiving end, it outlives this call
        let _ = events.send(Event::Page(Msg::Retrieved { seq, outcome }));
    }
}
