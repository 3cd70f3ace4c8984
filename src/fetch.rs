// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository fetching.

use tracing::{debug, info, warn};

use crate::{
    config::GithubSettings, error::FetchFailure, host::RepositoryHost, model::RepositorySummary,
};

/// Fetches the configured user's repositories with a single request.
///
/// The request asks for the `max_repos` most recently updated repositories.
/// Failures are logged and handed back to the caller; nothing here retries.
///
/// # Errors
///
/// Returns the [`FetchFailure`] reported by the host.
pub async fn fetch_repositories<H,>(
    host: &H,
    settings: &GithubSettings,
) -> Result<Vec<RepositorySummary,>, FetchFailure,>
where
    H: RepositoryHost,
{
    debug!("Fetching up to {} repositories for {}", settings.max_repos, settings.username);

    match host.list_repositories(&settings.username, settings.max_repos,).await {
        Ok(repositories,) => {
            info!("Fetched {} repositories for {}", repositories.len(), settings.username);
            Ok(repositories,)
        }
        Err(failure,) => {
            warn!("Failed to fetch GitHub projects for {}: {}", settings.username, failure);
            Err(failure,)
        }
    }
}
