use serde::{Deserialize, Serialize};

use super::portfolio::null_as_default;

/// A record that sits somewhere on the author's timeline.
///
/// Dates stay raw ISO strings: a missing or malformed date is valid input
/// and must resolve to a label, never to an error.
pub trait Dated {
    /// The date used for year grouping and year statistics.
    fn date(&self) -> Option<&str>;
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    /// `None` means the position is ongoing
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contributions: Vec<String>,
}

impl Dated for ExperienceEntry {
    fn date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: Option<String>,

    #[serde(default)]
    pub institution: Option<String>,

    /// Kept as text ("3.8", "3.8/4.0"); parsed only for tiering
    #[serde(default)]
    pub gpa: Option<String>,

    #[serde(default)]
    pub graduation_date: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
}

impl Dated for EducationEntry {
    fn date(&self) -> Option<&str> {
        self.graduation_date.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// Verification link; its presence makes the certification "verified"
    #[serde(default)]
    pub url: Option<String>,
}

impl Dated for Certification {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl Achievement {
    pub fn new(title: impl Into<String>, date: Option<&str>) -> Self {
        Self {
            title: Some(title.into()),
            date: date.map(str::to_string),
            ..Self::default()
        }
    }
}

impl Dated for Achievement {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
