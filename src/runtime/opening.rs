use std::sync::Arc;

use tracing::{debug, warn};

use crate::outside::UrlOpener;

/// Hand a URL to the opener without waiting for it.
///
/// Some openers only return once the browser they started exits, so the
/// call happens on its own thread. Failures are only logged.
pub fn spawn(url: String, opener: Arc<dyn UrlOpener>) {
    let spawned = std::thread::Builder::new()
        .name("opener".to_string())
        .spawn(move || {
            if let Err(err) = opener.open(&url) {
                warn!("Could not open {url}: {err:?}");
            } else {
                debug!("Opened {url}");
            }
        });

    if let Err(err) = spawned {
        warn!("Could not spawn opener thread: {err}");
    }
}
