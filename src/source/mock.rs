use std::time::Duration;

use indoc::indoc;
use tracing::debug;

use crate::{result::RetrievalError, types::VideoResult};

use super::{decode_response, VideoSource};

/// What the mock backend answers, whatever the URL
const MOCK_RESPONSE: &str = indoc! {r#"
    {
        "status": true,
        "result": {
            "cover": "https://p16-sign-sg.tiktokcdn.com/aweme/1080x1080/tos-alisg-i-0000/3a45d2d36f184a1a8b0c1d2e3f4a5b6c.jpeg?lk3s=a5d48078&x-expires=1701234567&x-signature=example",
            "title": "Amazing TikTok Video",
            "upload_date": "2023-11-28",
            "region": "ID",
            "duration": "60",
            "author": {
                "nickname": "@dapsz_id",
                "unique_id": "dapsz_id"
            },
            "music_info": {
                "title": "Awesome Song",
                "author": "Music Artist",
                "url": "https://example.com/music.mp3"
            },
            "data": [
                {
                    "quality": "720p",
                    "type": "watermark",
                    "url": "https://example.com/video_watermark.mp4"
                },
                {
                    "quality": "720p",
                    "type": "no_watermark",
                    "url": "https://example.com/video_no_wm.mp4"
                },
                {
                    "quality": "1080p",
                    "type": "no_watermark_hd",
                    "url": "https://example.com/video_no_wm_hd.mp4"
                }
            ]
        }
    }
"#};

/// Stand-in backend: waits, then answers with a fixed video
#[derive(Debug, Clone)]
pub struct MockSource {
    delay: Duration,
    /// Probability in `[0, 1]` that a retrieval fails
    failure_rate: f64,
}

impl MockSource {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl VideoSource for MockSource {
    fn retrieve(&self, url: &str) -> Result<VideoResult, RetrievalError> {
        debug!("Simulating retrieval of {url} ({:?})", self.delay);
        std::thread::sleep(self.delay);

        if self.failure_rate > 0.0 && fastrand::f64() < self.failure_rate {
            return Err(RetrievalError::Backend("Simulated backend failure".to_string()));
        }

        decode_response(MOCK_RESPONSE)
    }
}
