// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository selection rules.
//!
//! Forks and private repositories are dropped first according to the host
//! settings. Name matching then uses substring containment on normalized names.
//! A non-empty include list is an allow-list that replaces the exclude list
//! entirely; the exclude list only applies when nothing is included
//! explicitly.

use tracing::debug;

use crate::{
    config::{FilterLists, GithubSettings},
    model::RepositorySummary,
    normalize::NormalizedName,
};

/// Policy inputs of the repository filter.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct FilterPolicy
{
    /// Drop forked repositories.
    pub exclude_forks:   bool,
    /// Drop private repositories.
    pub exclude_private: bool,
    /// Normalized substrings that hide a repository.
    pub exclude:         Vec<NormalizedName,>,
    /// Normalized substrings a repository must contain; overrides `exclude`.
    pub include:         Vec<NormalizedName,>,
}

impl FilterPolicy
{
    /// Builds a policy from the host settings and the configured name lists.
    ///
    /// List entries are normalized with the same rules as repository names.
    pub fn from_config(github: &GithubSettings, lists: &FilterLists,) -> Self
    {
        Self {
            exclude_forks:   github.exclude_forks,
            exclude_private: github.exclude_private,
            exclude:         normalize_entries(&lists.exclude,),
            include:         normalize_entries(&lists.include,),
        }
    }

    /// Returns `true` when the repository survives every rule.
    pub fn accepts(&self, repository: &RepositorySummary,) -> bool
    {
        if self.exclude_forks && repository.fork {
            return false;
        }
        if self.exclude_private && repository.private {
            return false;
        }

        let name = repository.key();
        if !self.include.is_empty() {
            return self.include.iter().any(|entry| name.contains(entry,),);
        }

        !self.exclude.iter().any(|entry| name.contains(entry,),)
    }
}

/// Applies the policy to the fetched repositories, keeping their order.
///
/// # Examples
///
/// ```
/// use gitfolio::{FilterPolicy, NormalizedName, RepositorySummary, filter_repositories};
///
/// let json = r#"[
///     {"name":"weather-dashboard","html_url":"https://github.com/o/weather-dashboard"},
///     {"name":"test-playground","html_url":"https://github.com/o/test-playground"}
/// ]"#;
/// let repositories: Vec<RepositorySummary,> = serde_json::from_str(json,).expect("valid",);
/// let policy = FilterPolicy {
///     exclude: vec![NormalizedName::new("test",)],
///     ..FilterPolicy::default()
/// };
/// let kept = filter_repositories(repositories, &policy,);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name, "weather-dashboard");
/// ```
pub fn filter_repositories(
    repositories: Vec<RepositorySummary,>,
    policy: &FilterPolicy,
) -> Vec<RepositorySummary,>
{
    let fetched = repositories.len();
    let kept: Vec<RepositorySummary,> =
        repositories.into_iter().filter(|repository| policy.accepts(repository,),).collect();

    debug!("Kept {} of {} repositories after filtering", kept.len(), fetched);

    kept
}

fn normalize_entries(entries: &[String],) -> Vec<NormalizedName,>
{
    entries.iter().map(|entry| NormalizedName::new(entry.trim(),),).collect()
}
