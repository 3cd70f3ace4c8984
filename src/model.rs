// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository records flowing through the gallery pipeline.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedName;

/// Repository as reported by the GitHub repositories endpoint.
///
/// Only the fields consumed by the gallery are decoded; unknown fields are
/// ignored and optional ones default when absent.
///
/// # Examples
///
/// ```
/// use gitfolio::RepositorySummary;
///
/// let json = r#"{"name":"weather-dashboard","html_url":"https://github.com/octocat/weather-dashboard"}"#;
/// let repository: RepositorySummary = serde_json::from_str(json,).expect("valid repository",);
/// assert_eq!(repository.stargazers_count, 0);
/// assert!(repository.topics.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepositorySummary
{
    /// Repository name, unique per owner.
    pub name:             String,
    /// Free-form description supplied by the owner.
    #[serde(default)]
    pub description:      Option<String,>,
    /// Number of stargazers.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork:             bool,
    /// Whether the repository is private.
    #[serde(default)]
    pub private:          bool,
    /// Homepage configured in the repository settings.
    #[serde(default)]
    pub homepage:         Option<String,>,
    /// Source page on github.com.
    pub html_url:         String,
    /// Primary language detected by GitHub.
    #[serde(default)]
    pub language:         Option<String,>,
    /// Repository topics in the order GitHub reports them.
    #[serde(default)]
    pub topics:           Vec<String,>,
    /// Repository size in KiB.
    #[serde(default)]
    pub size:             u64,
    /// Timestamp of the last update, ISO-8601.
    #[serde(default)]
    pub updated_at:       Option<String,>,
}

impl RepositorySummary
{
    /// Normalized lookup key derived from the repository name.
    pub fn key(&self,) -> NormalizedName
    {
        NormalizedName::new(&self.name,)
    }

    /// Homepage URL when it is set to something other than blank text.
    pub fn homepage_url(&self,) -> Option<&str,>
    {
        non_blank(self.homepage.as_deref(),)
    }

    /// Owner-supplied description when it is set to something other than
    /// blank text.
    pub fn description_text(&self,) -> Option<&str,>
    {
        non_blank(self.description.as_deref(),)
    }
}

/// Repository paired with its language breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct EnrichedRepository
{
    /// Repository record produced by the fetcher.
    #[serde(flatten)]
    pub summary:   RepositorySummary,
    /// Up to five language names, largest share first.
    pub languages: Vec<String,>,
}

fn non_blank(value: Option<&str,>,) -> Option<&str,>
{
    value.map(str::trim,).filter(|text| !text.is_empty(),)
}

#[cfg(test)]
pub(crate) fn sample_repository(name: &str,) -> RepositorySummary
{
    RepositorySummary {
        name:             name.to_owned(),
        description:      None,
        stargazers_count: 0,
        fork:             false,
        private:          false,
        homepage:         None,
        html_url:         format!("https://github.com/octocat/{name}"),
        language:         None,
        topics:           Vec::new(),
        size:             0,
        updated_at:       None,
    }
}
