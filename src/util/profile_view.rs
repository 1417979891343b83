//! Pure mapping from a [`Profile`] to the render models the page draws.
//!
//! DESIGN
//! ======
//! Components stay thin: every decision about what a card shows, which
//! sections appear, and where a contact links to is made here, where it can
//! be tested without a DOM.

#[cfg(test)]
#[path = "profile_view_test.rs"]
mod profile_view_test;

use crate::net::types::{Contact, Profile};
use crate::util::browser::{EXTERNAL_REL, EXTERNAL_TARGET};

/// Appended to the title of cards that link somewhere else.
pub const LINK_INDICATOR: &str = "↗";

/// A link that opens in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: EXTERNAL_TARGET,
            rel: EXTERNAL_REL,
        }
    }
}

/// One card in the experience, projects, or education lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    /// Secondary line, usually a date range.
    pub meta: Option<String>,
    pub body: Vec<String>,
    pub tags: Vec<String>,
    pub link: Option<ExternalLink>,
}

/// A contact entry with its resolved link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
    pub href: Option<String>,
}

/// Page sections in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Projects,
    Skills,
    Education,
    Languages,
    Interests,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Summary,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Languages,
        Self::Interests,
    ];

    /// Element id used as the scroll target.
    pub fn id(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Languages => "languages",
            Self::Interests => "interests",
        }
    }

    /// Section title shown above the content and in the nav bar.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Summary => "نبذة",
            Self::Experience => "الخبرات",
            Self::Projects => "المشاريع",
            Self::Skills => "المهارات",
            Self::Education => "التعليم",
            Self::Languages => "اللغات",
            Self::Interests => "الاهتمامات",
        }
    }

    /// Whether `profile` has anything to show in this section.
    pub fn has_content(self, profile: &Profile) -> bool {
        match self {
            Self::Summary => profile.summary.as_deref().is_some_and(|s| !s.trim().is_empty()),
            Self::Experience => !profile.experience.is_empty(),
            Self::Projects => !profile.projects.is_empty(),
            Self::Skills => !profile.skills.is_empty(),
            Self::Education => !profile.education.is_empty(),
            Self::Languages => profile.languages.iter().any(|lang| non_empty(lang.name()).is_some()),
            Self::Interests => !profile.interests.is_empty(),
        }
    }
}

/// Sections with content, in display order.
pub fn visible_sections(profile: &Profile) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| section.has_content(profile))
        .collect()
}

/// One card per position: role as title, company and location as subtitle,
/// period as meta, highlights as body lines.
pub fn experience_cards(profile: &Profile) -> Vec<Card> {
    profile
        .experience
        .iter()
        .map(|job| {
            let subtitle = match (non_empty(&job.company), job.location.as_deref().and_then(non_empty)) {
                (Some(company), Some(location)) => Some(format!("{company} · {location}")),
                (Some(company), None) => Some(company.to_owned()),
                (None, Some(location)) => Some(location.to_owned()),
                (None, None) => None,
            };
            Card {
                title: job.role.clone(),
                subtitle,
                meta: job.period.clone(),
                body: job.highlights.clone(),
                ..Card::default()
            }
        })
        .collect()
}

/// One card per project. Linked projects carry [`LINK_INDICATOR`] in the
/// title and an [`ExternalLink`] that opens in a new browsing context.
pub fn project_cards(profile: &Profile) -> Vec<Card> {
    profile
        .projects
        .iter()
        .map(|project| {
            let link = project.link.as_deref().and_then(non_empty).map(ExternalLink::new);
            let title = if link.is_some() {
                format!("{} {LINK_INDICATOR}", project.name)
            } else {
                project.name.clone()
            };
            Card {
                title,
                body: project.description.iter().cloned().collect(),
                tags: project.tech.clone(),
                link,
                ..Card::default()
            }
        })
        .collect()
}

/// One card per degree: degree as title, school as subtitle.
pub fn education_cards(profile: &Profile) -> Vec<Card> {
    profile
        .education
        .iter()
        .map(|entry| Card {
            title: entry.degree.clone(),
            subtitle: non_empty(&entry.school).map(str::to_owned),
            meta: entry.period.clone(),
            body: entry.details.iter().cloned().collect(),
            ..Card::default()
        })
        .collect()
}

/// Contacts with a non-blank value, each with its resolved href.
pub fn contact_items(profile: &Profile) -> Vec<ContactItem> {
    profile
        .contacts
        .iter()
        .filter(|contact| !contact.value.trim().is_empty())
        .map(|contact| ContactItem {
            label: contact.label.clone(),
            value: contact.value.clone(),
            href: contact_href(contact),
        })
        .collect()
}

/// Resolve where a contact links to: the explicit url, else a scheme
/// inferred from the value.
pub fn contact_href(contact: &Contact) -> Option<String> {
    if let Some(url) = contact.url.as_deref().and_then(non_empty) {
        return Some(url.to_owned());
    }
    let value = contact.value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        return Some(value.to_owned());
    }
    if value.contains('@') {
        return Some(format!("mailto:{value}"));
    }
    if value.starts_with('+') || value.starts_with(|c: char| c.is_ascii_digit()) {
        let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        return Some(format!("tel:{digits}"));
    }
    None
}

/// Language chips, formatted `name (level)` when a level is given.
/// Entries without a name are skipped.
pub fn language_tags(profile: &Profile) -> Vec<String> {
    profile
        .languages
        .iter()
        .filter_map(|lang| {
            let name = non_empty(lang.name())?;
            Some(match lang.level().and_then(non_empty) {
                Some(level) => format!("{name} ({level})"),
                None => name.to_owned(),
            })
        })
        .collect()
}

/// Footer line, e.g. `© 2026 Sara Haddad`.
pub fn copyright_line(name: Option<&str>, year: Option<u32>) -> String {
    match (year, name.and_then(non_empty)) {
        (Some(year), Some(name)) => format!("© {year} {name}"),
        (Some(year), None) => format!("© {year}"),
        (None, Some(name)) => format!("© {name}"),
        (None, None) => "©".to_owned(),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
