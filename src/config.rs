// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document describing the portfolio gallery.
//!
//! The types in this module mirror the structure of the YAML document consumed
//! by the CLI. Every section except `github.username` is optional and falls
//! back to the defaults documented on each field. Keys also accept the
//! camelCase spelling used by browser-side portfolio configs.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// API root used when the configuration does not override it.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Number of repositories requested when no override is supplied.
pub const DEFAULT_MAX_REPOS: u8 = 10;
/// Star count a repository must exceed to be featured.
pub const DEFAULT_FEATURED_STAR_THRESHOLD: u64 = 5;
/// Cover image used for repositories without a curated image.
pub const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.pexels.com/photos/7376/startup-photos.jpg?auto=compress&cs=tinysrgb&w=800";
/// Largest page size accepted by the repositories endpoint.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use gitfolio::parse_config;
///
/// let yaml = r#"
/// github:
///   username: octocat
/// "#;
/// let config = parse_config(yaml,).expect("valid configuration",);
/// assert_eq!(config.github.max_repos, 10);
/// assert!(config.github.exclude_forks);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize,)]
pub struct PortfolioConfig
{
    /// Repository host settings.
    pub github:   GithubSettings,
    /// Card display settings.
    #[serde(default)]
    pub projects: ProjectSettings,
    /// Include and exclude name lists.
    #[serde(default)]
    pub filter:   FilterLists,
    /// Curated metadata tables keyed by repository name.
    #[serde(default)]
    pub curation: CurationTables,
}

/// Settings for the GitHub repositories request.
#[derive(Debug, Clone, Deserialize, Serialize,)]
pub struct GithubSettings
{
    /// Account whose repositories are listed.
    pub username: String,

    /// API root, `https://api.github.com` unless overridden.
    #[serde(default = "default_api_base", alias = "apiBase")]
    pub api_base: String,

    /// Page size of the single repositories request, within `1..=100`.
    #[serde(
        default = "default_max_repos",
        alias = "maxRepos",
        deserialize_with = "deserialize_max_repos"
    )]
    pub max_repos: u8,

    /// Repositories with more stars than this are featured.
    #[serde(default = "default_star_threshold", alias = "featuredStarThreshold")]
    pub featured_star_threshold: u64,

    /// Drop forked repositories.
    #[serde(default = "enabled", alias = "excludeForks")]
    pub exclude_forks: bool,

    /// Drop private repositories.
    #[serde(default, alias = "excludePrivate")]
    pub exclude_private: bool,
}

impl GithubSettings
{
    /// Replaces the configured username with a trimmed override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the override is blank.
    pub fn override_username(&mut self, username: &str,) -> Result<(), Error,>
    {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("github.username cannot be empty",),);
        }
        trimmed.clone_into(&mut self.username,);
        Ok((),)
    }
}

/// Card display settings.
#[derive(Debug, Clone, Deserialize, Serialize,)]
pub struct ProjectSettings
{
    /// Cover image for repositories without a curated image.
    #[serde(default = "default_image", alias = "defaultImage")]
    pub default_image: String,

    /// Render one tag per language.
    #[serde(default = "enabled", alias = "showLanguages")]
    pub show_languages: bool,

    /// Render star count and repository size.
    #[serde(default = "enabled", alias = "showStats")]
    pub show_stats: bool,

    /// Render the date of the last update.
    #[serde(default = "enabled", alias = "showLastUpdated")]
    pub show_last_updated: bool,
}

impl Default for ProjectSettings
{
    fn default() -> Self
    {
        Self {
            default_image:     default_image(),
            show_languages:    true,
            show_stats:        true,
            show_last_updated: true,
        }
    }
}

/// Name lists applied by the repository filter.
///
/// A non-empty `include` list overrides `exclude` entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize,)]
pub struct FilterLists
{
    /// Substrings a repository name must contain to be shown.
    #[serde(default, alias = "included")]
    pub include: Vec<String,>,
    /// Substrings that hide a repository when `include` is empty.
    #[serde(default, alias = "excluded")]
    pub exclude: Vec<String,>,
}

/// Hand-authored display overrides keyed by repository name.
///
/// Keys are normalized when the catalog is built, so `weather-dashboard` and
/// `weather_dashboard` address the same repository.
#[derive(Debug, Clone, Default, Deserialize, Serialize,)]
pub struct CurationTables
{
    /// Card descriptions.
    #[serde(default)]
    pub descriptions: BTreeMap<String, String,>,
    /// Status tags such as `LIVE`, `FYP` or `AI/ML`.
    #[serde(default)]
    pub statuses:     BTreeMap<String, String,>,
    /// Demo URLs; `null` marks a demo that does not exist yet.
    #[serde(default)]
    pub demos:        BTreeMap<String, Option<String,>,>,
    /// Cover images.
    #[serde(default)]
    pub images:       BTreeMap<String, String,>,
}

/// Loads the portfolio configuration from a YAML file.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the configuration violates invariants.
pub fn load_config(path: &Path,) -> Result<PortfolioConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses the portfolio configuration from a YAML document string.
///
/// # Errors
///
/// Propagates [`Error::Parse`] when the YAML cannot be decoded and
/// [`Error::Validation`] when required values are blank.
pub fn parse_config(contents: &str,) -> Result<PortfolioConfig, Error,>
{
    let mut config: PortfolioConfig = serde_yaml::from_str(contents,)?;

    let username = config.github.username.clone();
    config.github.override_username(&username,)?;

    if config.github.api_base.trim().is_empty() {
        return Err(Error::validation("github.api_base cannot be empty",),);
    }

    for (list, entries,) in
        [("filter.include", &config.filter.include,), ("filter.exclude", &config.filter.exclude,),]
    {
        if entries.iter().any(|entry| entry.trim().is_empty(),) {
            return Err(Error::validation(format!("{list} entries cannot be empty strings"),),);
        }
    }

    Ok(config,)
}

fn default_api_base() -> String
{
    DEFAULT_API_BASE.to_owned()
}

fn default_max_repos() -> u8
{
    DEFAULT_MAX_REPOS
}

fn default_star_threshold() -> u64
{
    DEFAULT_FEATURED_STAR_THRESHOLD
}

fn default_image() -> String
{
    DEFAULT_PROJECT_IMAGE.to_owned()
}

fn enabled() -> bool
{
    true
}

fn deserialize_max_repos<'de, D,>(deserializer: D,) -> Result<u8, D::Error,>
where
    D: serde::Deserializer<'de,>,
{
    let value = u8::deserialize(deserializer,)?;
    if value == 0 || value > MAX_PAGE_SIZE {
        return Err(serde::de::Error::custom("github.max_repos must be between 1 and 100",),);
    }
    Ok(value,)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::{
        DEFAULT_API_BASE, DEFAULT_PROJECT_IMAGE, load_config, parse_config,
    };
    use crate::error::Error;

    #[test]
    fn applies_defaults_for_optional_sections()
    {
        let config = parse_config("github:\n  username: octocat\n",).expect("valid configuration",);

        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.api_base, DEFAULT_API_BASE);
        assert_eq!(config.github.max_repos, 10);
        assert_eq!(config.github.featured_star_threshold, 5);
        assert!(config.github.exclude_forks);
        assert!(!config.github.exclude_private);
        assert_eq!(config.projects.default_image, DEFAULT_PROJECT_IMAGE);
        assert!(config.projects.show_languages);
        assert!(config.filter.include.is_empty());
        assert!(config.curation.demos.is_empty());
    }

    #[test]
    fn accepts_camel_case_keys()
    {
        let yaml = r#"
github:
  username: octocat
  apiBase: https://ghe.example/api/v3
  maxRepos: 25
  featuredStarThreshold: 2
  excludeForks: false
  excludePrivate: true
projects:
  defaultImage: https://img.example/default.png
  showStats: false
"#;
        let config = parse_config(yaml,).expect("valid configuration",);

        assert_eq!(config.github.api_base, "https://ghe.example/api/v3");
        assert_eq!(config.github.max_repos, 25);
        assert_eq!(config.github.featured_star_threshold, 2);
        assert!(!config.github.exclude_forks);
        assert!(config.github.exclude_private);
        assert_eq!(config.projects.default_image, "https://img.example/default.png");
        assert!(!config.projects.show_stats);
        assert!(config.projects.show_last_updated);
    }

    #[test]
    fn null_demo_entries_are_preserved()
    {
        let yaml = r#"
github:
  username: octocat
curation:
  demos:
    recording_system: null
    weather-dashboard: https://weather.example
"#;
        let config = parse_config(yaml,).expect("valid configuration",);

        assert_eq!(config.curation.demos.get("recording_system"), Some(&None));
        assert_eq!(
            config.curation.demos.get("weather-dashboard"),
            Some(&Some("https://weather.example".to_owned()))
        );
    }

    #[test]
    fn rejects_out_of_range_max_repos()
    {
        for value in ["0", "101",] {
            let yaml = format!("github:\n  username: octocat\n  max_repos: {value}\n");
            let error = parse_config(&yaml,).expect_err("expected range error",);
            assert!(error.to_string().contains("max_repos must be between 1 and 100"));
        }
    }

    #[test]
    fn rejects_blank_username()
    {
        let error = parse_config("github:\n  username: '  '\n",).expect_err("expected error",);
        match error {
            Error::Validation {
                message,
            } => assert_eq!(message, "github.username cannot be empty"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn trims_username()
    {
        let config =
            parse_config("github:\n  username: ' octocat '\n",).expect("valid configuration",);
        assert_eq!(config.github.username, "octocat");
    }

    #[test]
    fn rejects_blank_filter_entries()
    {
        let yaml = "github:\n  username: octocat\nfilter:\n  exclude: ['test', ' ']\n";
        let error = parse_config(yaml,).expect_err("expected validation error",);
        assert!(error.to_string().contains("filter.exclude entries cannot be empty strings"));
    }

    #[test]
    fn missing_github_section_is_a_parse_error()
    {
        let error = parse_config("projects: {}\n",).expect_err("expected parse error",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn load_config_reports_missing_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let error =
            load_config(&temp.path().join("missing.yaml",),).expect_err("expected io error",);
        assert!(matches!(error, Error::Io { .. }));
    }

    #[test]
    fn load_config_reads_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("portfolio.yaml",);
        fs::write(&path, "github:\n  username: octocat\n",).expect("failed to write config",);

        let config = load_config(&path,).expect("valid configuration",);
        assert_eq!(config.github.username, "octocat");
    }

    #[test]
    fn override_username_rejects_blank_values()
    {
        let mut config =
            parse_config("github:\n  username: octocat\n",).expect("valid configuration",);
        assert!(config.github.override_username("   ").is_err());
        config.github.override_username(" hubot ",).expect("valid override",);
        assert_eq!(config.github.username, "hubot");
    }
}
