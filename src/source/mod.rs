mod mock;

use std::fmt::Debug;

use serde::Deserialize;

pub use mock::MockSource;

use crate::{result::RetrievalError, types::VideoResult};

/// Where video results come from.
///
/// Implementations are called from a retrieval worker, never from the
/// event loop, so they are free to block.
pub trait VideoSource: Send + Sync + Debug {
    /// Resolve a validated URL into its video, within a bounded time
    fn retrieve(&self, url: &str) -> Result<VideoResult, RetrievalError>;
}

/// Envelope of every backend response
#[derive(Debug, Deserialize)]
struct Response {
    status: bool,
    result: Option<VideoResult>,
}

/// Decode a backend response body
pub fn decode_response(body: &str) -> Result<VideoResult, RetrievalError> {
    let response: Response = serde_json::from_str(body)?;

    match response {
        Response {
            status: true,
            result: Some(video),
        } => Ok(video),
        _ => Err(RetrievalError::Rejected),
    }
}
