//! Profile document schema.
//!
//! DESIGN
//! ======
//! Every field is optional and defaults to empty so a partial document still
//! renders. Explicit `null`s are treated like absent fields. Unknown fields
//! are ignored; no further validation happens.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The resume record served as `profile.json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name shown in the page header.
    pub name: Option<String>,
    /// Headline under the name (e.g. `"Backend Engineer"`).
    pub title: Option<String>,
    /// City/country line.
    pub location: Option<String>,
    /// Free-form introduction; Markdown is allowed.
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub contacts: Vec<Contact>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
}

/// One way to reach the profile owner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Human label (e.g. `"Email"`).
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    /// Displayed value (address, number, handle).
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Explicit link target. Derived from `value` when absent.
    pub url: Option<String>,
}

/// A spoken language, written either as a bare name or with a level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Language {
    Name(String),
    Detailed {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default)]
        level: Option<String>,
    },
}

impl Language {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name,
        }
    }

    pub fn level(&self) -> Option<&str> {
        match self {
            Self::Name(_) => None,
            Self::Detailed { level, .. } => level.as_deref(),
        }
    }
}

/// A position held.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    pub location: Option<String>,
    /// Display period, e.g. `"2021 – present"`.
    pub period: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

/// A personal or professional project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    /// External URL opened in a new tab.
    pub link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
}

/// A degree or course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    pub period: Option<String>,
    pub details: Option<String>,
}

/// Deserialize `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
