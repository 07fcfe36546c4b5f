use tracing::debug;

use crate::types::Section;

use super::{
    document::Document,
    listener::{DocumentEvent, Listeners, Subscription},
    Effect,
};

/// Section switching and the mobile navigation overlay
#[derive(Debug)]
pub struct NavController {
    /// Closes the overlay on any click outside of it
    outside_click: Option<Subscription>,
}

impl NavController {
    /// Attach the controller to the document, registering its outside-click listener
    pub fn mount(listeners: &Listeners) -> Self {
        Self {
            outside_click: Some(listeners.subscribe(DocumentEvent::Click)),
        }
    }

    /// Release the document-level listener
    pub fn unmount(&mut self) {
        self.outside_click = None;
    }

    /// Show exactly the requested section and close the mobile overlay.
    ///
    /// An unknown section hides every section. Any section but home also
    /// asks for a smooth scroll to its top.
    pub fn show_section(&self, doc: &mut Document, section: Option<Section>) -> Option<Effect> {
        doc.hide_sections();

        let scroll = match section {
            Some(section) => {
                debug!("Showing section {section}");
                doc.show_section(section);

                match section {
                    Section::Home => None,
                    Section::Downloader | Section::About | Section::Contact => {
                        Some(Effect::ScrollTo(section))
                    }
                }
            }
            None => {
                debug!("Unknown section requested, hiding all sections");
                None
            }
        };

        doc.close_menu();
        scroll
    }

    pub fn toggle_menu(&self, doc: &mut Document) {
        doc.toggle_menu();
    }
}
