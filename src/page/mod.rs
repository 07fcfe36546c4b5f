//! The page: a document model updated one message at a time.
//!
//! [Page::update] never blocks. Anything that has to happen outside of the
//! page (retrieving a video, opening a URL, scrolling) is returned as an
//! [Effect] for the runtime to carry out.

mod contact;
mod document;
mod listener;
pub mod messages;
mod nav;
mod render;
mod workflow;

use tracing::debug;

use self::{
    listener::{DocumentEvent, Listeners},
    nav::NavController,
};

pub use document::*;

use crate::{
    result::RetrievalError,
    types::{Section, VideoResult},
};

/// What the user clicked or tapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    MenuButton,
    /// A navigation link and the section identifier it carries.
    /// Mobile links live inside the mobile overlay.
    NavLink { page: String, mobile: bool },
    FetchButton,
    /// Zero-based index in the download options
    DownloadOption(usize),
    MusicButton,
    ContactSubmit,
    /// Anywhere that is not a control
    Elsewhere,
}

impl Target {
    /// Whether the click lands on the menu button or inside the mobile overlay
    fn is_within_menu(&self) -> bool {
        matches!(
            self,
            Target::MenuButton | Target::NavLink { mobile: true, .. }
        )
    }
}

#[derive(Debug)]
pub enum Msg {
    Tap(Target),
    UrlInput(String),
    ContactInput { field: String, value: String },
    Retrieved {
        seq: u64,
        outcome: Result<VideoResult, RetrievalError>,
    },
}

/// Work requested by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Retrieve { seq: u64, url: String },
    /// Open in a new browsing context
    OpenUrl(String),
    /// Smooth scroll so the section's top is at the top of the viewport
    ScrollTo(Section),
}

#[derive(Debug)]
pub struct Page {
    doc: Document,
    listeners: Listeners,
    nav: NavController,
    current_video: Option<VideoResult>,
    /// Sequence number of the latest retrieval asked for
    issued: u64,
}

impl Page {
    /// Build the page, mount its controllers and show the home section
    pub fn mount() -> (Self, Vec<Effect>) {
        let listeners = Listeners::default();
        let nav = NavController::mount(&listeners);
        let mut page = Self {
            doc: Document::default(),
            listeners,
            nav,
            current_video: None,
            issued: 0,
        };

        let effects = page.nav.show_section(&mut page.doc, Some(Section::Home));
        (page, effects.into_iter().collect())
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Tear the page down, releasing its document-level listeners
    pub fn unmount(&mut self) {
        self.nav.unmount();
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let mut effects = Vec::new();

        match msg {
            Msg::Tap(target) => self.tap(target, &mut effects),
            Msg::UrlInput(url) => self.doc.url_input = url,
            Msg::ContactInput { field, value } => self.doc.contact.set(&field, &value),
            Msg::Retrieved { seq, outcome } => self.retrieved(seq, outcome),
        }

        effects
    }

    fn tap(&mut self, target: Target, effects: &mut Vec<Effect>) {
        debug!("Tap on {target:?}");

        match &target {
            Target::MenuButton => self.nav.toggle_menu(&mut self.doc),
            Target::NavLink { page, .. } => {
                let section = Section::from_id(page);
                effects.extend(self.nav.show_section(&mut self.doc, section));
            }
            Target::FetchButton => self.fetch(effects),
            Target::DownloadOption(index) => self.download(*index, effects),
            Target::MusicButton => self.download_music(effects),
            Target::ContactSubmit => self.submit_contact(),
            Target::Elsewhere => {}
        }

        // The click then bubbles up to the document
        if self.listeners.is_subscribed(DocumentEvent::Click) && !target.is_within_menu() {
            self.doc.close_menu();
        }
    }

    /// Acknowledge the contact form without sending it anywhere
    fn submit_contact(&mut self) {
        debug!(
            "Contact form submitted with {} filled fields",
            self.doc.contact.filled()
        );
        self.doc.show_success(messages::CONTACT_SENT);
        self.doc.contact.reset();
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Author, Music, Variant, VariantKind};

    use super::*;

    impl Page {
        fn current_video(&self) -> Option<&VideoResult> {
            self.current_video.as_ref()
        }
    }

    fn video(title: &str) -> VideoResult {
        VideoResult {
            cover: "https://cdn.example/cover.jpeg".to_string(),
            title: title.to_string(),
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
            variants: vec![
                Variant {
                    quality: "720p".to_string(),
                    kind: VariantKind::Watermark,
                    url: "https://example.com/video_watermark.mp4".to_string(),
                },
                Variant {
                    quality: "1080p".to_string(),
                    kind: VariantKind::NoWatermarkHd,
                    url: "https://example.com/video_no_wm_hd.mp4".to_string(),
                },
            ],
        }
    }

    fn tap(page: &mut Page, target: Target) -> Vec<Effect> {
        page.update(Msg::Tap(target))
    }

    fn nav(page: &str, mobile: bool) -> Target {
        Target::NavLink {
            page: page.to_string(),
            mobile,
        }
    }

    /// Type the URL and press fetch, returning the sequence number asked for
    fn fetch(page: &mut Page, url: &str) -> u64 {
        page.update(Msg::UrlInput(url.to_string()));
        match tap(page, Target::FetchButton).as_slice() {
            [Effect::Retrieve { seq, .. }] => *seq,
            effects => panic!("Expected a retrieval, got {effects:?}"),
        }
    }

    #[test]
    fn mount_shows_home_without_scrolling() {
        let (page, effects) = Page::mount();
        assert!(effects.is_empty());
        assert_eq!(page.document().visible_sections(), [Section::Home]);
        assert_eq!(page.document().view_state(), ViewState::Idle);
    }

    #[test]
    fn nav_shows_one_section_and_scrolls() {
        let (mut page, _) = Page::mount();

        let effects = tap(&mut page, nav("about", false));
        assert_eq!(effects, [Effect::ScrollTo(Section::About)]);
        assert_eq!(page.document().visible_sections(), [Section::About]);

        let effects = tap(&mut page, nav("home", false));
        assert!(effects.is_empty());
        assert_eq!(page.document().visible_sections(), [Section::Home]);
    }

    #[test]
    fn unknown_section_hides_everything_and_closes_menu() {
        let (mut page, _) = Page::mount();
        tap(&mut page, Target::MenuButton);
        assert!(page.document().is_menu_open());

        let effects = tap(&mut page, nav("pricing", true));
        assert!(effects.is_empty());
        assert!(page.document().visible_sections().is_empty());
        assert!(!page.document().is_menu_open());
    }

    #[test]
    fn menu_button_toggles_without_outside_rule() {
        let (mut page, _) = Page::mount();
        tap(&mut page, Target::MenuButton);
        assert!(page.document().is_menu_open());
        tap(&mut page, Target::MenuButton);
        assert!(!page.document().is_menu_open());
    }

    #[test]
    fn mobile_link_closes_overlay_once() {
        let (mut page, _) = Page::mount();
        tap(&mut page, Target::MenuButton);

        tap(&mut page, nav("downloader", true));
        assert!(!page.document().is_menu_open());
        assert_eq!(page.document().visible_sections(), [Section::Downloader]);
    }

    #[test]
    fn outside_click_closes_overlay() {
        let (mut page, _) = Page::mount();
        tap(&mut page, Target::MenuButton);
        tap(&mut page, Target::Elsewhere);
        assert!(!page.document().is_menu_open());

        // Never opens it
        tap(&mut page, Target::Elsewhere);
        assert!(!page.document().is_menu_open());
    }

    #[test]
    fn unmounted_nav_stops_outside_rule() {
        let (mut page, _) = Page::mount();
        page.unmount();
        tap(&mut page, Target::MenuButton);
        tap(&mut page, Target::Elsewhere);
        assert!(page.document().is_menu_open());
    }

    #[test]
    fn empty_url_is_refused_without_loading() {
        let (mut page, _) = Page::mount();
        page.update(Msg::UrlInput("   ".to_string()));
        let effects = tap(&mut page, Target::FetchButton);

        assert!(effects.is_empty());
        assert_eq!(page.document().view_state(), ViewState::Idle);
        assert_eq!(
            page.document().toast(),
            Some(Toast::Error("Silakan masukkan URL TikTok"))
        );
    }

    #[test]
    fn foreign_url_is_refused() {
        let (mut page, _) = Page::mount();
        page.update(Msg::UrlInput("https://youtu.be/abc".to_string()));
        let effects = tap(&mut page, Target::FetchButton);

        assert!(effects.is_empty());
        assert_eq!(
            page.document().toast(),
            Some(Toast::Error("URL TikTok tidak valid"))
        );
    }

    #[test]
    fn fetch_then_render() {
        let (mut page, _) = Page::mount();
        page.update(Msg::UrlInput(
            " https://www.tiktok.com/@user/video/123 ".to_string(),
        ));
        let effects = tap(&mut page, Target::FetchButton);
        assert_eq!(
            effects,
            [Effect::Retrieve {
                seq: 1,
                url: "https://www.tiktok.com/@user/video/123".to_string()
            }]
        );
        assert_eq!(page.document().view_state(), ViewState::Loading);

        let resolved = video("Amazing TikTok Video");
        page.update(Msg::Retrieved {
            seq: 1,
            outcome: Ok(resolved.clone()),
        });

        let doc = page.document();
        assert_eq!(doc.view_state(), ViewState::ResultShown);
        assert!(!doc.is_visible(Visibility::LOADING));
        assert_eq!(doc.slots.title, resolved.title);
        assert_eq!(doc.download_options.len(), 2);
        assert_eq!(doc.toast(), None);
        assert_eq!(page.current_video(), Some(&resolved));
    }

    #[test]
    fn loading_clears_previous_toast() {
        let (mut page, _) = Page::mount();
        tap(&mut page, Target::FetchButton);
        assert!(page.document().toast().is_some());

        fetch(&mut page, "https://vm.tiktok.com/ZSabc/");
        assert_eq!(page.document().toast(), None);
    }

    #[test]
    fn retrieval_failure_shows_generic_message() {
        let (mut page, _) = Page::mount();
        let seq = fetch(&mut page, "https://vm.tiktok.com/ZSabc/");

        page.update(Msg::Retrieved {
            seq,
            outcome: Err(RetrievalError::Backend("connection reset".to_string())),
        });

        let doc = page.document();
        assert_eq!(doc.view_state(), ViewState::Idle);
        assert_eq!(
            doc.toast(),
            Some(Toast::Error("Terjadi kesalahan saat mengambil data video"))
        );
        assert_eq!(page.current_video(), None);
    }

    #[test]
    fn latest_request_wins() {
        let (mut page, _) = Page::mount();
        let first = fetch(&mut page, "https://www.tiktok.com/@a/video/1");
        let second = fetch(&mut page, "https://www.tiktok.com/@b/video/2");
        assert!(second > first);

        page.update(Msg::Retrieved {
            seq: second,
            outcome: Ok(video("second")),
        });
        page.update(Msg::Retrieved {
            seq: first,
            outcome: Ok(video("first")),
        });

        assert_eq!(page.document().slots.title, "second");
        assert_eq!(page.current_video().map(|v| v.title.as_str()), Some("second"));
    }

    #[test]
    fn stale_result_keeps_loading() {
        let (mut page, _) = Page::mount();
        let first = fetch(&mut page, "https://www.tiktok.com/@a/video/1");
        fetch(&mut page, "https://www.tiktok.com/@b/video/2");

        page.update(Msg::Retrieved {
            seq: first,
            outcome: Ok(video("first")),
        });

        assert_eq!(page.document().view_state(), ViewState::Loading);
        assert_eq!(page.current_video(), None);
    }

    #[test]
    fn download_buttons_open_their_own_variant() {
        let (mut page, _) = Page::mount();
        let seq = fetch(&mut page, "https://www.tiktok.com/@user/video/123");
        page.update(Msg::Retrieved {
            seq,
            outcome: Ok(video("v")),
        });

        let effects = tap(&mut page, Target::DownloadOption(1));
        assert_eq!(
            effects,
            [Effect::OpenUrl(
                "https://example.com/video_no_wm_hd.mp4".to_string()
            )]
        );
        assert_eq!(
            page.document().toast(),
            Some(Toast::Success("Download dimulai..."))
        );

        let effects = tap(&mut page, Target::MusicButton);
        assert_eq!(
            effects,
            [Effect::OpenUrl("https://example.com/music.mp3".to_string())]
        );
        assert_eq!(
            page.document().toast(),
            Some(Toast::Success("Download musik dimulai..."))
        );
    }

    #[test]
    fn controls_without_result_do_nothing() {
        let (mut page, _) = Page::mount();
        assert!(tap(&mut page, Target::DownloadOption(0)).is_empty());
        assert!(tap(&mut page, Target::MusicButton).is_empty());
        assert_eq!(page.document().toast(), None);
    }

    #[test]
    fn controls_of_a_hidden_result_do_nothing() {
        let (mut page, _) = Page::mount();
        let seq = fetch(&mut page, "https://www.tiktok.com/@user/video/123");
        page.update(Msg::Retrieved {
            seq,
            outcome: Ok(video("v")),
        });

        // A new fetch hides the previous result while loading
        fetch(&mut page, "https://www.tiktok.com/@user/video/456");
        assert!(tap(&mut page, Target::DownloadOption(0)).is_empty());
        assert!(tap(&mut page, Target::MusicButton).is_empty());
        assert_eq!(page.document().toast(), None);
    }

    #[test]
    fn contact_submission_resets_form() {
        let (mut page, _) = Page::mount();
        page.update(Msg::ContactInput {
            field: "name".to_string(),
            value: "Dapsz".to_string(),
        });
        page.update(Msg::ContactInput {
            field: "message".to_string(),
            value: "Halo".to_string(),
        });

        let effects = tap(&mut page, Target::ContactSubmit);
        assert!(effects.is_empty());
        assert_eq!(page.document().contact.filled(), 0);
        assert_eq!(
            page.document().toast(),
            Some(Toast::Success(
                "Pesan berhasil dikirim! Terima kasih telah menghubungi kami."
            ))
        );
    }
}
