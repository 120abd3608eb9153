//! Section navigation — maps menu identifiers to where the browser should go.
//!
//! Resolution never fails: an identifier with no matching section sends the
//! visitor to the top of the page.

use crate::profile::Profile;

/// In-page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Work,
    Experience,
    About,
    Play,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Work,
        Section::Experience,
        Section::About,
        Section::Play,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::Experience => "experience",
            Section::About => "about",
            Section::Play => "play",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Work => "Work",
            Section::Experience => "Experience",
            Section::About => "About",
            Section::Play => "Play",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// A menu entry: either a section or the external resume link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Section(Section),
    Resume,
}

impl MenuItem {
    pub fn id(self) -> &'static str {
        match self {
            MenuItem::Section(s) => s.id(),
            MenuItem::Resume => RESUME_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Section(s) => s.label(),
            MenuItem::Resume => "Resume",
        }
    }
}

const RESUME_ID: &str = "resume";

/// Desktop menu: every section plus the resume link.
pub fn desktop_menu() -> Vec<MenuItem> {
    Section::ALL
        .into_iter()
        .map(MenuItem::Section)
        .chain(std::iter::once(MenuItem::Resume))
        .collect()
}

/// Mobile menu: sections only.
pub fn mobile_menu() -> Vec<MenuItem> {
    Section::ALL.into_iter().map(MenuItem::Section).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Anchor(Section),
    External(String),
    /// No such section; stay on the page.
    Top,
}

impl NavTarget {
    /// URL for a `Location` header.
    pub fn location(&self) -> String {
        match self {
            NavTarget::Anchor(section) => format!("/#{}", section.id()),
            NavTarget::External(url) => url.clone(),
            NavTarget::Top => "/".to_string(),
        }
    }
}

/// Resolves a menu identifier. Matching ignores case and surrounding whitespace.
pub fn resolve(id: &str, profile: &Profile) -> NavTarget {
    let id = id.trim().to_ascii_lowercase();
    if id == RESUME_ID {
        return NavTarget::External(profile.resume.clone());
    }
    match Section::from_id(&id) {
        Some(section) => NavTarget::Anchor(section),
        None => NavTarget::Top,
    }
}
