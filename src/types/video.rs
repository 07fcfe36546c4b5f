use serde::{Deserialize, Deserializer};

/// Everything the page knows about one video
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoResult {
    /// URI of the still image shown as thumbnail
    pub cover: String,
    pub title: String,
    /// Kept as sent by the backend, never parsed
    pub upload_date: String,
    pub region: String,
    #[serde(rename = "duration", deserialize_with = "string_or_number")]
    pub duration_seconds: String,
    pub author: Author,
    #[serde(rename = "music_info")]
    pub music: Music,
    #[serde(rename = "data", default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub nickname: String,
    pub unique_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Music {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// One downloadable rendition of a video
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    pub quality: String,
    #[serde(rename = "type")]
    pub kind: VariantKind,
    pub url: String,
}

/// Watermark treatment of a [Variant]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum VariantKind {
    Watermark,
    NoWatermark,
    NoWatermarkHd,
    /// Any kind the page has no dedicated label for
    Other(String),
}

impl From<String> for VariantKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "watermark" => Self::Watermark,
            "no_watermark" => Self::NoWatermark,
            "no_watermark_hd" => Self::NoWatermarkHd,
            _ => Self::Other(kind),
        }
    }
}

impl VariantKind {
    /// First line of the download button label
    pub fn label(&self) -> &'static str {
        match self {
            VariantKind::Watermark => "Video Watermark",
            VariantKind::NoWatermark => "Video No WM",
            VariantKind::NoWatermarkHd => "Video HD No WM",
            VariantKind::Other(_) => "Download Video",
        }
    }
}

impl Variant {
    /// Two-line button label: the kind, then the quality
    pub fn label(&self) -> String {
        format!("{}\n{}", self.kind.label(), self.quality)
    }
}

/// Backends disagree on whether the duration is `"60"` or `60`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
