use bitflags::bitflags;

use crate::types::Section;

use super::contact::ContactForm;

bitflags! {
    /// Regions of the document that are currently displayed
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Visibility: u16 {
        const HOME = 1 << 0;
        const DOWNLOADER = 1 << 1;
        const ABOUT = 1 << 2;
        const CONTACT = 1 << 3;
        const MOBILE_MENU = 1 << 4;
        const LOADING = 1 << 5;
        const RESULT = 1 << 6;
        const ERROR_TOAST = 1 << 7;
        const SUCCESS_TOAST = 1 << 8;

        const SECTIONS = Self::HOME.bits()
            | Self::DOWNLOADER.bits()
            | Self::ABOUT.bits()
            | Self::CONTACT.bits();
        const TOASTS = Self::ERROR_TOAST.bits() | Self::SUCCESS_TOAST.bits();
    }
}

impl Visibility {
    pub fn section(section: Section) -> Self {
        match section {
            Section::Home => Self::HOME,
            Section::Downloader => Self::DOWNLOADER,
            Section::About => Self::ABOUT,
            Section::Contact => Self::CONTACT,
        }
    }
}

/// Main display state of the downloader, toasts aside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    ResultShown,
}

/// The toast currently displayed, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast<'a> {
    Error(&'a str),
    Success(&'a str),
}

/// Text and image slots of the result template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSlots {
    pub thumbnail: String,
    pub title: String,
    pub author: String,
    pub upload_date: String,
    pub region: String,
    pub duration: String,
    pub music_title: String,
}

/// A dynamically created download control.
///
/// It holds its own copy of the URL it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOption {
    pub label: String,
    pub url: String,
}

/// The page model: what is displayed and what every control is bound to
#[derive(Debug, Default)]
pub struct Document {
    visible: Visibility,
    error_text: String,
    success_text: String,

    pub url_input: String,
    pub slots: ResultSlots,
    pub download_options: Vec<DownloadOption>,
    pub contact: ContactForm,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    pub fn is_visible(&self, region: Visibility) -> bool {
        self.visible.contains(region)
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|&section| self.is_visible(Visibility::section(section)))
            .collect()
    }

    pub fn hide_sections(&mut self) {
        self.visible.remove(Visibility::SECTIONS);
    }

    pub fn show_section(&mut self, section: Section) {
        self.visible.insert(Visibility::section(section));
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_visible(Visibility::MOBILE_MENU)
    }

    pub fn toggle_menu(&mut self) {
        self.visible.toggle(Visibility::MOBILE_MENU);
    }

    pub fn close_menu(&mut self) {
        self.visible.remove(Visibility::MOBILE_MENU);
    }

    /// Show the loading indicator in place of the result container
    pub fn show_loading(&mut self) {
        self.visible.insert(Visibility::LOADING);
        self.visible.remove(Visibility::RESULT);
    }

    pub fn hide_loading(&mut self) {
        self.visible.remove(Visibility::LOADING);
    }

    pub fn show_result(&mut self) {
        self.visible.insert(Visibility::RESULT);
    }

    pub fn show_error(&mut self, message: &str) {
        self.error_text = message.to_string();
        self.visible.insert(Visibility::ERROR_TOAST);
        self.visible.remove(Visibility::SUCCESS_TOAST);
    }

    pub fn show_success(&mut self, message: &str) {
        self.success_text = message.to_string();
        self.visible.insert(Visibility::SUCCESS_TOAST);
        self.visible.remove(Visibility::ERROR_TOAST);
    }

    pub fn hide_messages(&mut self) {
        self.visible.remove(Visibility::TOASTS);
    }

    pub fn toast(&self) -> Option<Toast<'_>> {
        if self.is_visible(Visibility::ERROR_TOAST) {
            Some(Toast::Error(&self.error_text))
        } else if self.is_visible(Visibility::SUCCESS_TOAST) {
            Some(Toast::Success(&self.success_text))
        } else {
            None
        }
    }

    pub fn view_state(&self) -> ViewState {
        if self.is_visible(Visibility::LOADING) {
            ViewState::Loading
        } else if self.is_visible(Visibility::RESULT) {
            ViewState::ResultShown
        } else {
            ViewState::Idle
        }
    }
}
