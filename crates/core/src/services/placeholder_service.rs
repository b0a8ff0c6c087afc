use crate::models::stats::{Stats, YearKey};
use crate::models::view::{
    AchievementCategory, AchievementRow, CertificationRow, EducationRow, ExperienceRow, GpaTier,
    ProjectView, Resolved, SkillView, TextField,
};

/// Fallback labels for individual missing fields.
pub mod labels {
    pub const NAME: &str = "Your Name";
    pub const CURRENT_STATUS: &str = "Current Status";
    pub const TAGLINE: &str = "Add your professional tagline here";
    pub const IMAGE_ALT: &str = "Profile";
    pub const ROLE: &str = "Role Title";
    pub const COMPANY: &str = "Company Name";
    pub const DEGREE: &str = "Degree Program";
    pub const INSTITUTION: &str = "Institution Name";
    pub const CERTIFICATION: &str = "Certification Name";
    pub const PROVIDER: &str = "Provider";
    pub const ACHIEVEMENT: &str = "Achievement Title";
    pub const EMAIL: &str = "Add email to portfolio.json";
}

/// The one empty-state rule every section goes through.
pub struct PlaceholderService;

impl PlaceholderService {
    pub fn new() -> Self {
        Self
    }

    /// Show `items` when there are any, otherwise the canned `placeholders`.
    pub fn resolve<T>(&self, items: Vec<T>, placeholders: Vec<T>) -> Resolved<T> {
        if items.is_empty() {
            Resolved {
                display: placeholders,
                is_placeholder: true,
            }
        } else {
            Resolved {
                display: items,
                is_placeholder: false,
            }
        }
    }

    /// Scalar version of `resolve`: blank or missing text falls back to `placeholder`.
    pub fn text_or_placeholder(&self, value: Option<&str>, placeholder: &str) -> TextField {
        match value {
            Some(v) if !v.trim().is_empty() => TextField::real(v),
            _ => TextField::placeholder(placeholder),
        }
    }

    // ── Canned sample sets ──────────────────────────────────────────

    pub fn passions(&self) -> Vec<String> {
        ["Web Development", "Problem Solving", "Continuous Learning", "Innovation"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn skills(&self) -> Vec<SkillView> {
        ["JavaScript", "React", "Node.js", "Python", "CSS", "Git"]
            .into_iter()
            .map(|name| SkillView {
                name: name.to_string(),
                badge_url: None,
                github_repo_url: None,
            })
            .collect()
    }

    pub fn projects(&self) -> Vec<ProjectView> {
        let sample = |title: &str, description: &str, stack: [&str; 3]| ProjectView {
            title: title.to_string(),
            description: description.to_string(),
            tech_stack: stack.into_iter().map(String::from).collect(),
            demo_url: None,
            repo_url: None,
            screenshot_url: None,
        };

        vec![
            sample(
                "E-Commerce Platform",
                "A full-stack e-commerce solution with modern UI and secure payment processing",
                ["React", "Node.js", "MongoDB"],
            ),
            sample(
                "Task Management App",
                "Collaborative task management tool with real-time updates and team features",
                ["Vue.js", "Express", "PostgreSQL"],
            ),
            sample(
                "Weather Dashboard",
                "Interactive weather dashboard with location-based forecasts and data visualization",
                ["JavaScript", "API Integration", "Charts.js"],
            ),
        ]
    }

    pub fn experience(&self) -> Vec<ExperienceRow> {
        vec![ExperienceRow {
            role: TextField::placeholder("Software Developer"),
            company: TextField::placeholder("Tech Company"),
            period: "Jan 2023 - Present".into(),
            duration: "1y 6m".into(),
            contributions: vec![
                "Developed and maintained web applications".into(),
                "Collaborated with cross-functional teams".into(),
            ],
        }]
    }

    pub fn education(&self) -> Vec<EducationRow> {
        vec![EducationRow {
            degree: TextField::placeholder("Bachelor of Computer Science"),
            institution: TextField::placeholder("University Name"),
            graduated: "May 2023".into(),
            gpa: Some("3.8".into()),
            gpa_tier: GpaTier::High,
            certifications: vec![CertificationRow {
                name: TextField::placeholder("Sample Certification"),
                provider: TextField::placeholder("Provider Name"),
                date: "January 2023".into(),
                url: None,
            }],
            certification_stats: Stats {
                count: 1,
                verified_count: 0,
                min_year: Some(2023),
                max_year: Some(2023),
            },
        }]
    }

    pub fn achievements(&self) -> Vec<AchievementRow> {
        vec![
            AchievementRow {
                title: TextField::placeholder("Best Project Award"),
                description: Some("Recognized for outstanding innovation".into()),
                date: "January 2024".into(),
                url: None,
                category: AchievementCategory::Award,
                year: YearKey::Year(2024),
            },
            AchievementRow {
                title: TextField::placeholder("Tech Certification"),
                description: Some("Certified in advanced technologies".into()),
                date: "March 2024".into(),
                url: None,
                category: AchievementCategory::Certification,
                year: YearKey::Year(2024),
            },
        ]
    }
}

impl Default for PlaceholderService {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the optional text carries something other than whitespace.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
