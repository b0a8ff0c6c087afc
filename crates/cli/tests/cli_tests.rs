// ═══════════════════════════════════════════════════════════════════
// CLI Tests: argument parsing, settings files, end-to-end run
// ═══════════════════════════════════════════════════════════════════

use std::io::Write;

use chrono::NaiveDate;
use clap::Parser;
use portfolio_view_cli::config::{load_settings, Category, Section};
use portfolio_view_cli::{run, CliConfig};
use portfolio_view_core::models::settings::MonthCounting;
use portfolio_view_core::models::view::{AchievementCategory, CategoryFilter};
use tempfile::NamedTempFile;

const PORTFOLIO: &str = r#"{
    "hero": { "name": "Grace Hopper" },
    "experience": [{ "role": "Rear Admiral", "company": "US Navy", "startDate": "2022-01-01", "endDate": "2023-07-01" }],
    "achievements": [
        { "title": "Computer Sciences Man of the Year Award", "date": "1969-01-01" },
        { "title": "Programming contest judge", "date": "1970-05-01" }
    ]
}"#;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn parse(args: &[&str]) -> CliConfig {
    let mut argv = vec!["portfolio-view"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════

mod args {
    use super::*;

    #[test]
    fn minimal_invocation() {
        let config = parse(&["portfolio.json"]);
        assert_eq!(config.path.to_str(), Some("portfolio.json"));
        assert_eq!(config.section, None);
        assert_eq!(config.category, None);
        assert!(!config.compact);
        assert!(!config.verbose);
    }

    #[test]
    fn all_flags() {
        let config = parse(&[
            "p.json", "--today", "2024-03-01", "--section", "achievements",
            "--category", "awards", "--compact", "--verbose",
        ]);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(config.section, Some(Section::Achievements));
        assert_eq!(config.category, Some(Category::Awards));
        assert!(config.compact);
        assert!(config.verbose);
    }

    #[test]
    fn bad_date_rejected() {
        assert!(CliConfig::try_parse_from(["portfolio-view", "p.json", "--today", "March"]).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(CliConfig::try_parse_from(["portfolio-view", "p.json", "--section", "blog"]).is_err());
    }

    #[test]
    fn path_is_required() {
        assert!(CliConfig::try_parse_from(["portfolio-view"]).is_err());
    }

    #[test]
    fn category_maps_to_filter() {
        assert_eq!(CategoryFilter::from(Category::All), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from(Category::Certifications),
            CategoryFilter::Only(AchievementCategory::Certification)
        );
        assert_eq!(
            CategoryFilter::from(Category::Other),
            CategoryFilter::Only(AchievementCategory::Other)
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings files
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn loads_toml_settings() {
        let file = temp_file(
            "reference_date = \"2024-06-30\"\nmonth_counting = \"thirty_day\"\nhigh_gpa_threshold = 3.7\n",
        );
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.reference_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(settings.month_counting, MonthCounting::ThirtyDay);
        assert_eq!(settings.high_gpa_threshold, 3.7);
        assert_eq!(settings.medium_gpa_threshold, 3.0);
    }

    #[test]
    fn empty_toml_keeps_defaults() {
        let file = temp_file("");
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.month_counting, MonthCounting::Calendar);
        assert_eq!(settings.reference_date, None);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let file = temp_file("month_counting = \"weekly\"\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid settings file"));
    }

    #[test]
    fn missing_settings_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(&dir.path().join("settings.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }

    #[test]
    fn today_flag_overrides_settings_file() {
        let file = temp_file("reference_date = \"2020-01-01\"\n");
        let path = file.path().to_str().unwrap();
        let config = parse(&["p.json", "--settings", path, "--today", "2025-05-05"]);
        let settings = config.display_settings().unwrap();
        assert_eq!(settings.reference_date, NaiveDate::from_ymd_opt(2025, 5, 5));
    }
}

// ═══════════════════════════════════════════════════════════════════
// run
// ═══════════════════════════════════════════════════════════════════

mod end_to_end {
    use super::*;

    fn run_json(args: &[&str]) -> serde_json::Value {
        let output = run(&parse(args)).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn whole_page() {
        let file = temp_file(PORTFOLIO);
        let json = run_json(&[file.path().to_str().unwrap(), "--today", "2025-01-01"]);
        assert_eq!(json["today"], "2025-01-01");
        assert_eq!(json["hero"]["name"]["text"], "Grace Hopper");
        assert_eq!(json["experience"]["entries"]["display"][0]["duration"], "1y 6m");
        assert_eq!(json["skills"]["skills"]["isPlaceholder"], true);
    }

    #[test]
    fn single_section() {
        let file = temp_file(PORTFOLIO);
        let json = run_json(&[file.path().to_str().unwrap(), "--section", "hero"]);
        assert_eq!(json["imageAlt"], "Grace Hopper");
    }

    #[test]
    fn thirty_day_settings_apply() {
        let portfolio = temp_file(PORTFOLIO);
        let settings = temp_file("month_counting = \"thirty_day\"\n");
        let json = run_json(&[
            portfolio.path().to_str().unwrap(),
            "--settings",
            settings.path().to_str().unwrap(),
            "--section",
            "experience",
        ]);
        assert_eq!(json["entries"]["display"][0]["duration"], "1y 7m");
    }

    #[test]
    fn category_filter_output() {
        let file = temp_file(PORTFOLIO);
        let json = run_json(&[file.path().to_str().unwrap(), "--category", "competitions"]);
        let buckets = json.as_array().unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0]["year"], 1970);
    }

    #[test]
    fn compact_output_is_one_line() {
        let file = temp_file(PORTFOLIO);
        let output = run(&parse(&[file.path().to_str().unwrap(), "--compact", "--today", "2025-01-01"])).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn missing_portfolio_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let err = run(&parse(&[path.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("failed to load portfolio"));
    }

    #[test]
    fn invalid_thresholds_fail() {
        let portfolio = temp_file(PORTFOLIO);
        let settings = temp_file("high_gpa_threshold = 2.0\nmedium_gpa_threshold = 3.0\n");
        let err = run(&parse(&[
            portfolio.path().to_str().unwrap(),
            "--settings",
            settings.path().to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(format!("{err:#}").contains("must not exceed"));
    }
}
