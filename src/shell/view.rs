use std::{
    fmt::{Display, Write as _},
    io::Write,
};

use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;

use crate::{
    page::{Document, Toast, ViewState, Visibility},
    runtime::PageView,
    types::Section,
};

/// The page as text
pub struct PageText<'a> {
    pub doc: &'a Document,
    pub color: bool,
}

impl Display for PageText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let doc = self.doc;

        let visible = doc.visible_sections();
        f.write_str("sections:")?;
        for section in Section::ALL {
            if visible.contains(&section) {
                write!(f, " [{section}]")?;
            } else {
                write!(f, " {section}")?;
            }
        }
        if doc.is_menu_open() {
            f.write_str(" | menu open")?;
        }
        f.write_char('\n')?;

        if doc.is_visible(Visibility::DOWNLOADER) {
            writeln!(f, "url: {}", doc.url_input)?;

            match doc.view_state() {
                ViewState::Idle => {}
                ViewState::Loading => writeln!(f, "loading...")?,
                ViewState::ResultShown => self.fmt_result(f)?,
            }
        }

        if doc.is_visible(Visibility::CONTACT) {
            writeln!(f, "contact form:")?;
            for (field, value) in doc.contact.fields() {
                if value.is_empty() {
                    writeln!(f, "  {field}:")?;
                } else {
                    writeln!(f, "  {field}: {value}")?;
                }
            }
        }

        match doc.toast() {
            Some(Toast::Error(msg)) if self.color => writeln!(f, "{}", msg.red()),
            Some(Toast::Error(msg)) => writeln!(f, "error: {msg}"),
            Some(Toast::Success(msg)) if self.color => writeln!(f, "{}", msg.green()),
            Some(Toast::Success(msg)) => writeln!(f, "ok: {msg}"),
            None => Ok(()),
        }
    }
}

impl PageText<'_> {
    /// The filled result template and its download controls
    fn fmt_result(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = &self.doc.slots;
        writeln!(f, "cover:    {}", slots.thumbnail)?;
        writeln!(f, "title:    {}", slots.title)?;
        writeln!(f, "author:   {}", slots.author)?;
        writeln!(f, "uploaded: {}", slots.upload_date)?;
        writeln!(f, "region:   {}", slots.region)?;
        writeln!(f, "duration: {}", slots.duration)?;
        writeln!(f, "music:    {}", slots.music_title)?;

        writeln!(f, "downloads:")?;
        for (n, option) in self.doc.download_options.iter().enumerate() {
            writeln!(f, "  [{}] {}", n + 1, option.label.replace('\n', " "))?;
        }
        writeln!(f, "  [music] Download Music")
    }
}

/// Renders the page on a terminal
pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }
}

impl<W: Write> PageView for TerminalView<W> {
    fn render(&mut self, doc: &Document) -> Result<()> {
        let text = PageText {
            doc,
            color: self.color,
        };
        let rule = "-".repeat(40);
        let rule = if self.color {
            rule.dimmed().to_string()
        } else {
            rule
        };

        write!(self.out, "{rule}\n{text}").into_diagnostic()?;
        self.out.flush().into_diagnostic()
    }

    fn scroll_to(&mut self, section: Section) -> Result<()> {
        writeln!(self.out, "(scrolling to {section})").into_diagnostic()
    }

    fn notice(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").into_diagnostic()?;
        self.out.flush().into_diagnostic()
    }
}
