use crate::types::VideoResult;

use super::document::{DownloadOption, Document, ResultSlots};

/// Fill the result template with a video.
///
/// Previous download options are discarded; one option is created per
/// variant, in order.
pub fn render_video(doc: &mut Document, video: &VideoResult) {
    doc.slots = ResultSlots {
        thumbnail: video.cover.clone(),
        title: video.title.clone(),
        author: format!("{} ({})", video.author.nickname, video.author.unique_id),
        upload_date: video.upload_date.clone(),
        region: video.region.clone(),
        duration: format!("{}s", video.duration_seconds),
        music_title: format!("{} by {}", video.music.title, video.music.author),
    };

    doc.download_options = video
        .variants
        .iter()
        .map(|variant| DownloadOption {
            label: variant.label(),
            url: variant.url.clone(),
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use crate::types::{Author, Music, Variant, VariantKind};

    use super::*;

    fn video(variants: Vec<Variant>) -> VideoResult {
        VideoResult {
            cover: "https://cdn.example/cover.jpeg".to_string(),
            title: "Amazing TikTok Video".to_string(),
            upload_date: "2023-11-28".to_string(),
            region: "ID".to_string(),
            duration_seconds: "60".to_string(),
            author: Author {
                nickname: "@dapsz_id".to_string(),
                unique_id: "dapsz_id".to_string(),
            },
            music: Music {
                title: "Awesome Song".to_string(),
                author: "Music Artist".to_string(),
                url: "https://example.com/music.mp3".to_string(),
            },
            variants,
        }
    }

    fn variant(quality: &str, kind: VariantKind, url: &str) -> Variant {
        Variant {
            quality: quality.to_string(),
            kind,
            url: url.to_string(),
        }
    }

    #[test]
    fn scalar_slots() {
        let mut doc = Document::default();
        render_video(&mut doc, &video(vec![]));

        assert_eq!(doc.slots.thumbnail, "https://cdn.example/cover.jpeg");
        assert_eq!(doc.slots.title, "Amazing TikTok Video");
        assert_eq!(doc.slots.author, "@dapsz_id (dapsz_id)");
        assert_eq!(doc.slots.upload_date, "2023-11-28");
        assert_eq!(doc.slots.region, "ID");
        assert_eq!(doc.slots.duration, "60s");
        assert_eq!(doc.slots.music_title, "Awesome Song by Music Artist");
        assert!(doc.download_options.is_empty());
    }

    #[test]
    fn one_option_per_variant_in_order() {
        let mut doc = Document::default();
        render_video(
            &mut doc,
            &video(vec![
                variant("720p", VariantKind::Watermark, "https://a/wm.mp4"),
                variant("720p", VariantKind::NoWatermark, "https://a/nowm.mp4"),
                variant("1080p", VariantKind::NoWatermarkHd, "https://a/hd.mp4"),
                variant("360p", VariantKind::Other("audio".into()), "https://a/o.mp4"),
            ]),
        );

        let labels: Vec<_> = doc.download_options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Video Watermark\n720p",
                "Video No WM\n720p",
                "Video HD No WM\n1080p",
                "Download Video\n360p",
            ]
        );
        assert_eq!(doc.download_options[2].url, "https://a/hd.mp4");
    }

    #[test]
    fn rendering_replaces_previous_options() {
        let mut doc = Document::default();
        render_video(
            &mut doc,
            &video(vec![
                variant("720p", VariantKind::Watermark, "https://a/1.mp4"),
                variant("720p", VariantKind::Watermark, "https://a/2.mp4"),
            ]),
        );
        render_video(
            &mut doc,
            &video(vec![variant("480p", VariantKind::NoWatermark, "https://b/1.mp4")]),
        );

        assert_eq!(
            doc.download_options,
            [DownloadOption {
                label: "Video No WM\n480p".to_string(),
                url: "https://b/1.mp4".to_string(),
            }]
        );
    }
}
