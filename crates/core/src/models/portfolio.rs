use serde::{Deserialize, Deserializer, Serialize};

use super::profile::{AboutSection, ContactSection, HeroSection};
use super::showcase::{Project, Skill};
use super::timeline::{Achievement, EducationEntry, ExperienceEntry};

/// The root record read from `portfolio.json`.
///
/// Every field is optional on the wire: missing (or `null`) arrays become
/// empty, missing sections become their all-absent default. Nothing here
/// is mutated after loading; views are derived fresh on every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Name, status line, tagline and headshot
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero: HeroSection,

    /// Free-form passions list
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: AboutSection,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,

    /// Work history, in the order the author listed it
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,

    /// Degrees, each with its own certifications
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<Achievement>,

    /// Email and social profile links
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: ContactSection,
}

impl Portfolio {
    /// Total number of certifications across all education entries.
    pub fn certification_count(&self) -> usize {
        self.education.iter().map(|e| e.certifications.len()).sum()
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
