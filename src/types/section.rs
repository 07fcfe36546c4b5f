use std::fmt::Display;

/// One of the mutually exclusive top-level regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    Downloader,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Downloader,
        Section::About,
        Section::Contact,
    ];

    /// The identifier carried by the navigation links, e.g. "about"
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Downloader => "downloader",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Look up the section for a navigation link identifier.
    ///
    /// The match is exact: "About" or " about" do not name a section.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
