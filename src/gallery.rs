// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Gallery lifecycle.
//!
//! A [`Showcase`] runs the whole pipeline (fetch, filter, enrich, resolve,
//! render) and reports each step of the `Loading → Populated | Empty |
//! Errored` lifecycle to a [`GalleryContainer`]. Calling [`Showcase::load`]
//! again is the retry operation.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::{GithubSettings, PortfolioConfig},
    curation::{CuratedCatalog, MetadataResolver},
    enrich::enrich_repositories,
    error::{self, Error, FetchFailure},
    fetch::fetch_repositories,
    filter::{FilterPolicy, filter_repositories},
    host::RepositoryHost,
    page::wrap_document,
    render::{CardOptions, ProjectCard, escape_html, render_cards},
};

/// Message shown while the pipeline runs.
pub const LOADING_MESSAGE: &str = "Loading projects from GitHub...";
/// Message shown when no repository survives filtering.
pub const EMPTY_MESSAGE: &str =
    "Unable to load projects from GitHub. Please check your username or try again later.";
/// Message shown when the pipeline fails.
pub const ERROR_MESSAGE: &str = "Failed to load projects. Please try again later.";

/// Observable state of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum GalleryState {
    /// The pipeline is running.
    Loading,
    /// At least one card is ready.
    Populated(Vec<ProjectCard>),
    /// The request succeeded but nothing survived filtering.
    Empty,
    /// Fetching or enrichment failed.
    Errored(FetchFailure),
}

impl GalleryState {
    /// Short lowercase name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Populated(_) => "populated",
            Self::Empty => "empty",
            Self::Errored(_) => "errored",
        }
    }

    /// Whether the state offers the retry affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Empty | Self::Errored(_))
    }

    /// Renders the state as the gallery fragment.
    pub fn to_markup(&self) -> String {
        match self {
            Self::Loading => format!(
                "<div class=\"loading-projects\">\n  <div class=\"loading-spinner\"></div>\n  <p>{LOADING_MESSAGE}</p>\n</div>\n"
            ),
            Self::Populated(cards) => render_cards(cards),
            Self::Empty => format!(
                "<div class=\"no-projects\">\n  <p>{EMPTY_MESSAGE}</p>\n  {}\n</div>\n",
                retry_button()
            ),
            Self::Errored(failure) => format!(
                "<div class=\"error-projects\" data-failure=\"{}\">\n  <p>{ERROR_MESSAGE}</p>\n  <p class=\"error-detail\">{}</p>\n  {}\n</div>\n",
                failure.kind(),
                escape_html(&failure.to_string()),
                retry_button()
            ),
        }
    }
}

fn retry_button() -> &'static str {
    "<button type=\"button\" class=\"btn-primary\" data-action=\"retry\">Retry</button>"
}

/// Target whose contents are replaced wholesale on every state change.
pub trait GalleryContainer {
    /// Replaces the current contents with `markup`.
    ///
    /// # Errors
    ///
    /// Returns an error when the target cannot be written.
    fn replace(&mut self, markup: &str) -> Result<(), Error>;
}

impl GalleryContainer for String {
    fn replace(&mut self, markup: &str) -> Result<(), Error> {
        self.clear();
        self.push_str(markup);
        Ok(())
    }
}

/// Shape of the file written by [`FileContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Only the gallery fragment.
    #[default]
    Fragment,
    /// A complete HTML document embedding the fragment.
    Page,
}

/// Container backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileContainer {
    path:   PathBuf,
    layout: Layout,
}

impl FileContainer {
    /// Creates a container writing to `path` with the given layout.
    pub fn new(path: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GalleryContainer for FileContainer {
    fn replace(&mut self, markup: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| error::render_io_error(parent, source))?;
        }

        let contents = match self.layout {
            Layout::Fragment => markup.to_owned(),
            Layout::Page => wrap_document(markup),
        };

        let file =
            File::create(&self.path).map_err(|source| error::render_io_error(&self.path, source))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .map_err(|source| error::render_io_error(&self.path, source))?;
        writer
            .flush()
            .map_err(|source| error::render_io_error(&self.path, source))
    }
}

/// Gallery controller owning one pipeline configuration.
#[derive(Debug)]
pub struct Showcase<'a, H> {
    host:     H,
    settings: &'a GithubSettings,
    policy:   FilterPolicy,
    resolver: MetadataResolver<'a>,
    options:  CardOptions,
    runs:     u64,
}

impl<'a, H> Showcase<'a, H>
where
    H: RepositoryHost,
{
    /// Builds a controller from the configuration and a curated catalog.
    pub fn new(host: H, config: &'a PortfolioConfig, catalog: &'a CuratedCatalog) -> Self {
        Self {
            host,
            settings: &config.github,
            policy: FilterPolicy::from_config(&config.github, &config.filter),
            resolver: MetadataResolver::new(catalog, &config.projects.default_image),
            options: CardOptions::from_config(config),
            runs: 0,
        }
    }

    /// Number of completed [`Showcase::load`] runs.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Runs the pipeline once and returns its terminal state.
    pub async fn collect(&self) -> GalleryState {
        let repositories = match fetch_repositories(&self.host, self.settings).await {
            Ok(repositories) => repositories,
            Err(failure) => return GalleryState::Errored(failure),
        };

        let kept = filter_repositories(repositories, &self.policy);
        if kept.is_empty() {
            info!("No repositories left to display after filtering");
            return GalleryState::Empty;
        }

        let enriched =
            match enrich_repositories(&self.host, &self.settings.username, kept).await {
                Ok(enriched) => enriched,
                Err(failure) => return GalleryState::Errored(failure),
            };

        let cards = enriched
            .iter()
            .map(|repository| {
                let metadata = self.resolver.resolve(&repository.summary);
                ProjectCard::build(repository, metadata, &self.options)
            })
            .collect::<Vec<_>>();

        debug!("Built {} project cards", cards.len());
        GalleryState::Populated(cards)
    }

    /// Shows the loading state, runs the pipeline and shows its outcome.
    ///
    /// Each call is a fresh run; there is no automatic retry.
    ///
    /// # Errors
    ///
    /// Returns an error only when the container cannot be written. Pipeline
    /// failures are reported as [`GalleryState::Errored`].
    pub async fn load<C>(&mut self, container: &mut C) -> Result<GalleryState, Error>
    where
        C: GalleryContainer,
    {
        self.runs += 1;
        info!("Loading gallery (run {})", self.runs);

        container.replace(&GalleryState::Loading.to_markup())?;

        let state = self.collect().await;
        match &state {
            GalleryState::Errored(failure) => {
                warn!("Gallery run {} failed: {}", self.runs, failure);
            }
            other => {
                info!("Gallery run {} finished: {}", self.runs, other.name());
            }
        }

        container.replace(&state.to_markup())?;
        Ok(state)
    }
}
