// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Access to the repository host.
//!
//! [`RepositoryHost`] is the seam between the gallery pipeline and the network.
//! [`GitHubHost`] implements it on top of an [`Octocrab`] client pointed at the
//! configured API root.

use std::{fmt, future::Future};

use octocrab::Octocrab;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{Error, FetchFailure},
    model::RepositorySummary,
};

/// Read-only operations the gallery needs from a repository host.
///
/// Implementations are cloned into concurrent enrichment tasks, so they must
/// be cheap to clone and safe to share.
pub trait RepositoryHost: Clone + Send + Sync + 'static
{
    /// Lists repositories of `username`, most recently updated first, with a
    /// page size of `per_page`.
    fn list_repositories(
        &self,
        username: &str,
        per_page: u8,
    ) -> impl Future<Output = Result<Vec<RepositorySummary,>, FetchFailure,>,> + Send;

    /// Lists language names of `owner/repository` in the order reported by
    /// the host (largest byte share first).
    fn list_languages(
        &self,
        owner: &str,
        repository: &str,
    ) -> impl Future<Output = Result<Vec<String,>, FetchFailure,>,> + Send;
}

#[derive(Debug, Serialize,)]
struct RepositoriesQuery
{
    sort:     &'static str,
    per_page: u8,
}

/// [`RepositoryHost`] backed by the GitHub REST API.
#[derive(Clone,)]
pub struct GitHubHost
{
    client: Octocrab,
}

impl fmt::Debug for GitHubHost
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.debug_struct("GitHubHost",).finish_non_exhaustive()
    }
}

impl GitHubHost
{
    /// Creates a client for the API root `api_base`, authenticated with
    /// `token` when one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `api_base` is not a valid URI and
    /// [`Error::Service`] when the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitfolio::{GitHubHost, RepositoryHost};
    ///
    /// # async fn example() -> Result<(), gitfolio::Error> {
    /// let host = GitHubHost::new("https://api.github.com", None,)?;
    /// let repositories = host.list_repositories("octocat", 10,).await;
    /// println!("{repositories:?}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_base: &str, token: Option<&str,>,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder()
            .base_uri(api_base.trim(),)
            .map_err(|e| Error::validation(format!("invalid github.api_base '{api_base}': {e}"),),)?;

        if let Some(token,) = token.map(str::trim,).filter(|value| !value.is_empty(),) {
            builder = builder.personal_token(token.to_owned(),);
        }

        let client = builder
            .build()
            .map_err(|e| Error::service(format!("failed to initialize GitHub client: {e}"),),)?;

        Ok(Self {
            client,
        },)
    }
}

impl RepositoryHost for GitHubHost
{
    async fn list_repositories(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary,>, FetchFailure,>
    {
        let route = format!("/users/{username}/repos");
        debug!("GET {} (sort=updated, per_page={})", route, per_page);

        let query = RepositoriesQuery {
            sort: "updated", per_page,
        };

        self.client.get(route, Some(&query,),).await.map_err(classify,)
    }

    async fn list_languages(
        &self,
        owner: &str,
        repository: &str,
    ) -> Result<Vec<String,>, FetchFailure,>
    {
        let route = format!("/repos/{owner}/{repository}/languages");
        debug!("GET {}", route);

        let breakdown: Map<String, Value,> =
            self.client.get(route, None::<&(),>,).await.map_err(classify,)?;

        Ok(breakdown.into_iter().map(|(language, _bytes,)| language,).collect(),)
    }
}

/// Maps an octocrab error onto the fetch failure taxonomy.
fn classify(error: octocrab::Error,) -> FetchFailure
{
    match error {
        octocrab::Error::GitHub {
            source, ..
        } => FetchFailure::api(source.status_code.as_u16(), source.message,),
        octocrab::Error::Serde {
            source, ..
        } => FetchFailure::decode(source.to_string(),),
        octocrab::Error::Json {
            source, ..
        } => FetchFailure::decode(source.to_string(),),
        other => FetchFailure::network(other.to_string(),),
    }
}
