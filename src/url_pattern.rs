use std::sync::OnceLock;

use regex::Regex;

/// Either the full site or its URL shortener.
///
/// No scheme or host parsing: the pattern may appear anywhere in the text.
const TIKTOK_URL: &str = r"tiktok\.com|vm\.tiktok\.com";

static TIKTOK_URL_RE: OnceLock<Regex> = OnceLock::new();

fn tiktok_url_re() -> &'static Regex {
    TIKTOK_URL_RE.get_or_init(|| Regex::new(TIKTOK_URL).expect("TikTok URL pattern is valid"))
}

/// Whether the (already trimmed) text looks like a TikTok URL
pub fn is_tiktok_url(url: &str) -> bool {
    tiktok_url_re().is_match(url)
}
