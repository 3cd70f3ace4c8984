// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Curated GitHub project gallery for a portfolio site.
//!
//! The library fetches a user's recently updated repositories, filters them,
//! enriches each one with its top languages, attaches hand-curated display
//! metadata, and renders the result as HTML project cards. The pipeline is
//! driven by [`Showcase`], which reports every lifecycle state to a
//! [`GalleryContainer`].
//!
//! ```
//! use gitfolio::{FilterPolicy, NormalizedName, filter_repositories, parse_config};
//!
//! let config = parse_config("github:\n  username: octocat\n",)?;
//! let policy = FilterPolicy::from_config(&config.github, &config.filter,);
//! assert!(policy.exclude_forks);
//! assert_eq!(NormalizedName::new("Weather-Dashboard").as_str(), "weather_dashboard");
//! assert!(filter_repositories(Vec::new(), &policy).is_empty());
//! # Ok::<(), gitfolio::Error>(())
//! ```

mod config;
mod curation;
mod enrich;
mod error;
mod fetch;
mod filter;
mod gallery;
mod host;
mod model;
mod normalize;
mod page;
mod render;

pub use config::{
    CurationTables, DEFAULT_API_BASE, DEFAULT_FEATURED_STAR_THRESHOLD, DEFAULT_MAX_REPOS,
    DEFAULT_PROJECT_IMAGE, FilterLists, GithubSettings, MAX_PAGE_SIZE, PortfolioConfig,
    ProjectSettings, load_config, parse_config,
};
pub use curation::{
    CuratedCatalog, CuratedDemo, CuratedMetadata, DEFAULT_STATUS, DemoLink, DemoOrigin,
    GENERIC_DESCRIPTION, MetadataResolver,
};
pub use enrich::{LANGUAGE_LIMIT, enrich_repositories};
pub use error::{Error, FetchFailure, io_error, render_io_error};
pub use fetch::fetch_repositories;
pub use filter::{FilterPolicy, filter_repositories};
pub use gallery::{FileContainer, GalleryContainer, GalleryState, Layout, Showcase};
pub use host::{GitHubHost, RepositoryHost};
pub use model::{EnrichedRepository, RepositorySummary};
pub use normalize::NormalizedName;
pub use page::wrap_document;
pub use render::{
    CardOptions, CardStats, FALLBACK_CATEGORY, ProjectCard, category_label, format_size,
    humanize_title, render_cards,
};
