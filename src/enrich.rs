// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Language enrichment.
//!
//! One languages request is issued per repository and all of them run
//! concurrently on a [`JoinSet`]. Every task reports its input position, so
//! results land in a pre-sized slot vector and the output keeps the input
//! order no matter which request finishes first.

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::{
    error::FetchFailure,
    host::RepositoryHost,
    model::{EnrichedRepository, RepositorySummary},
};

/// Maximum number of languages attached to a repository.
pub const LANGUAGE_LIMIT: usize = 5;

/// Attaches the top languages to every repository.
///
/// A failed languages request leaves that repository with an empty list and
/// does not affect the others.
///
/// # Errors
///
/// Returns [`FetchFailure::Aborted`] when an enrichment task panics or is
/// cancelled. The remaining tasks are aborted and no partial result is
/// produced.
pub async fn enrich_repositories<H,>(
    host: &H,
    owner: &str,
    repositories: Vec<RepositorySummary,>,
) -> Result<Vec<EnrichedRepository,>, FetchFailure,>
where
    H: RepositoryHost,
{
    let mut tasks = JoinSet::new();

    for (index, repository,) in repositories.iter().enumerate() {
        let host = host.clone();
        let owner = owner.to_owned();
        let name = repository.name.clone();

        tasks.spawn(async move {
            let languages = match host.list_languages(&owner, &name,).await {
                Ok(mut languages,) => {
                    languages.truncate(LANGUAGE_LIMIT,);
                    languages
                }
                Err(failure,) => {
                    warn!("Error fetching languages for {}/{}: {}", owner, name, failure);
                    Vec::new()
                }
            };
            (index, languages,)
        },);
    }

    let mut slots: Vec<Option<Vec<String,>,>,> = vec![None; repositories.len()];

    while let Some(joined,) = tasks.join_next().await {
        let (index, languages,) = joined.map_err(|error| {
            warn!("Language enrichment task failed: {}", error);
            FetchFailure::aborted(error.to_string(),)
        },)?;

        if let Some(slot,) = slots.get_mut(index,) {
            *slot = Some(languages,);
        }
    }

    debug!("Enriched {} repositories with language data", repositories.len());

    Ok(repositories
        .into_iter()
        .zip(slots,)
        .map(|(summary, languages,)| EnrichedRepository {
            summary,
            languages: languages.unwrap_or_default(),
        },)
        .collect(),)
}
