use serde::{Deserialize, Serialize};

use super::portfolio::null_as_default;

/// Top-of-page introduction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(default)]
    pub name: Option<String>,

    /// Short status badge (e.g., "Open to work")
    #[serde(default)]
    pub current_status: Option<String>,

    #[serde(default)]
    pub tagline: Option<String>,

    #[serde(default)]
    pub headshot_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub passions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
}

/// Profile URLs. Only GitHub and LinkedIn are expected; the rest are extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, rename = "linkedIn")]
    pub linked_in: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub twitter: Option<String>,

    #[serde(default)]
    pub dev_to: Option<String>,
}
