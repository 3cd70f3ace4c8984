// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Curated display metadata.
//!
//! The catalog holds four immutable tables keyed by [`NormalizedName`]. It is
//! built once from configuration and lent to the [`MetadataResolver`], which
//! combines exact table lookups with the repository's own fields to produce
//! [`CuratedMetadata`]. No fuzzy matching happens here.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{
    config::CurationTables, error::Error, model::RepositorySummary, normalize::NormalizedName,
};

/// Status tag used when a repository has no curated status.
pub const DEFAULT_STATUS: &str = "DEV";
/// Description used when neither the catalog nor the repository has one.
pub const GENERIC_DESCRIPTION: &str = "A professional software project showcasing modern \
                                       development practices and innovative solutions for \
                                       real-world challenges.";

/// Curated demo entry.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum CuratedDemo
{
    /// Demo hosted at the given URL.
    Link(String,),
    /// Entry exists but no demo is published yet.
    Pending,
}

/// Immutable lookup tables of hand-authored metadata.
#[derive(Debug, Clone, Default,)]
pub struct CuratedCatalog
{
    descriptions: HashMap<NormalizedName, String,>,
    statuses:     HashMap<NormalizedName, String,>,
    demos:        HashMap<NormalizedName, CuratedDemo,>,
    images:       HashMap<NormalizedName, String,>,
}

impl CuratedCatalog
{
    /// Builds the catalog from configuration, normalizing every key.
    ///
    /// Blank demo URLs are treated like `null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when two keys of the same table normalize
    /// to the same lookup key, since only one of them could ever be reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitfolio::{CuratedCatalog, CurationTables};
    ///
    /// let mut tables = CurationTables::default();
    /// tables.statuses.insert("weather-dashboard".to_owned(), "LIVE".to_owned());
    /// let catalog = CuratedCatalog::from_tables(&tables,).expect("no collisions",);
    /// assert_eq!(catalog.status("weather_dashboard"), Some("LIVE"));
    /// ```
    pub fn from_tables(tables: &CurationTables,) -> Result<Self, Error,>
    {
        let demos = index("demos", &tables.demos, |url| {
            match url.as_deref().map(str::trim,).filter(|value| !value.is_empty(),) {
                Some(link,) => CuratedDemo::Link(link.to_owned(),),
                None => CuratedDemo::Pending,
            }
        },)?;

        Ok(Self {
            descriptions: index("descriptions", &tables.descriptions, |text| text.trim().to_owned(),)?,
            statuses: index("statuses", &tables.statuses, |status| status.trim().to_owned(),)?,
            demos,
            images: index("images", &tables.images, |url| url.trim().to_owned(),)?,
        },)
    }

    /// Curated description for a normalized key.
    pub fn description(&self, key: &str,) -> Option<&str,>
    {
        self.descriptions.get(key,).map(String::as_str,)
    }

    /// Curated status tag for a normalized key.
    pub fn status(&self, key: &str,) -> Option<&str,>
    {
        self.statuses.get(key,).map(String::as_str,)
    }

    /// Curated demo entry for a normalized key.
    pub fn demo(&self, key: &str,) -> Option<&CuratedDemo,>
    {
        self.demos.get(key,)
    }

    /// Curated cover image for a normalized key.
    pub fn image(&self, key: &str,) -> Option<&str,>
    {
        self.images.get(key,).map(String::as_str,)
    }
}

fn index<V, T, F,>(
    table: &str,
    entries: &BTreeMap<String, V,>,
    convert: F,
) -> Result<HashMap<NormalizedName, T,>, Error,>
where
    F: Fn(&V,) -> T,
{
    let mut indexed = HashMap::with_capacity(entries.len(),);
    let mut origins: HashMap<NormalizedName, &str,> = HashMap::with_capacity(entries.len(),);

    for (raw, value,) in entries {
        let key = NormalizedName::new(raw.trim(),);
        if key.is_empty() {
            return Err(Error::validation(format!("curation.{table} keys cannot be empty"),),);
        }
        if let Some(previous,) = origins.insert(key.clone(), raw.as_str(),) {
            return Err(Error::validation(format!(
                "curation.{table} entries '{previous}' and '{raw}' both normalize to '{key}'"
            ),),);
        }
        indexed.insert(key, convert(value,),);
    }

    Ok(indexed,)
}

/// Where a resolved demo URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum DemoOrigin
{
    /// Curated demo table.
    Curated,
    /// Repository homepage field.
    Homepage,
    /// Repository source page, used when nothing better exists.
    Source,
}

/// Resolved demo affordance; always carries a clickable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct DemoLink
{
    /// Target of the demo link.
    pub url:    String,
    /// Table or field the URL was taken from.
    pub origin: DemoOrigin,
}

/// Display metadata resolved for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct CuratedMetadata
{
    /// Card description.
    pub description: String,
    /// Status tag.
    pub status:      String,
    /// Demo affordance.
    pub demo:        DemoLink,
    /// Cover image URL.
    pub image_url:   String,
}

/// Resolves curated metadata using a borrowed catalog.
#[derive(Debug, Clone, Copy,)]
pub struct MetadataResolver<'catalog,>
{
    catalog:       &'catalog CuratedCatalog,
    default_image: &'catalog str,
}

impl<'catalog,> MetadataResolver<'catalog,>
{
    /// Creates a resolver over `catalog` falling back to `default_image` for
    /// covers.
    pub fn new(catalog: &'catalog CuratedCatalog, default_image: &'catalog str,) -> Self
    {
        Self {
            catalog,
            default_image,
        }
    }

    /// Resolves description, status, demo link and cover image.
    pub fn resolve(&self, repository: &RepositorySummary,) -> CuratedMetadata
    {
        let key = repository.key();

        CuratedMetadata {
            description: self.description(&key, repository,),
            status:      self.status(&key,),
            demo:        self.demo(&key, repository,),
            image_url:   self.image(&key,),
        }
    }

    fn description(&self, key: &NormalizedName, repository: &RepositorySummary,) -> String
    {
        self.catalog
            .description(key.as_str(),)
            .or_else(|| repository.description_text(),)
            .unwrap_or(GENERIC_DESCRIPTION,)
            .to_owned()
    }

    fn status(&self, key: &NormalizedName,) -> String
    {
        self.catalog.status(key.as_str(),).unwrap_or(DEFAULT_STATUS,).to_owned()
    }

    fn demo(&self, key: &NormalizedName, repository: &RepositorySummary,) -> DemoLink
    {
        if let Some(CuratedDemo::Link(url,),) = self.catalog.demo(key.as_str(),) {
            return DemoLink {
                url: url.clone(), origin: DemoOrigin::Curated,
            };
        }

        match repository.homepage_url() {
            Some(homepage,) => DemoLink {
                url: homepage.to_owned(), origin: DemoOrigin::Homepage,
            },
            None => DemoLink {
                url: repository.html_url.clone(), origin: DemoOrigin::Source,
            },
        }
    }

    fn image(&self, key: &NormalizedName,) -> String
    {
        self.catalog.image(key.as_str(),).unwrap_or(self.default_image,).to_owned()
    }
}

#[cfg(test)]
mod tests
{
    use super::{
        CuratedCatalog, CuratedDemo, DEFAULT_STATUS, DemoOrigin, GENERIC_DESCRIPTION,
        MetadataResolver,
    };
    use crate::{config::CurationTables, error::Error, model::sample_repository};

    const DEFAULT_IMAGE: &str = "https://img.example/default.png";

    fn tables() -> CurationTables
    {
        let mut tables = CurationTables::default();
        tables
            .descriptions
            .insert("weather_dashboard".to_owned(), "Forecasts and maps.".to_owned(),);
        tables.statuses.insert("sentiment-analysis-app".to_owned(), "AI/ML".to_owned(),);
        tables
            .demos
            .insert("weather-dashboard".to_owned(), Some("https://weather.example".to_owned(),),);
        tables.demos.insert("some-fork".to_owned(), None,);
        tables.demos.insert("blank-demo".to_owned(), Some("  ".to_owned(),),);
        tables.images.insert("weather_dashboard".to_owned(), "https://img.example/w.png".to_owned(),);
        tables
    }

    #[test]
    fn curated_demo_takes_precedence_over_homepage()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);
        let mut repository = sample_repository("weather-dashboard",);
        repository.homepage = Some("https://homepage.example".to_owned(),);

        let metadata = resolver.resolve(&repository,);

        assert_eq!(metadata.demo.url, "https://weather.example");
        assert_eq!(metadata.demo.origin, DemoOrigin::Curated);
    }

    #[test]
    fn pending_demo_without_homepage_falls_back_to_source_page()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);
        let repository = sample_repository("some-fork",);

        let metadata = resolver.resolve(&repository,);

        assert_eq!(metadata.demo.url, repository.html_url);
        assert_eq!(metadata.demo.origin, DemoOrigin::Source);
    }

    #[test]
    fn pending_demo_with_homepage_uses_homepage()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);
        let mut repository = sample_repository("some-fork",);
        repository.homepage = Some("https://fork.example".to_owned(),);

        let metadata = resolver.resolve(&repository,);

        assert_eq!(metadata.demo.url, "https://fork.example");
        assert_eq!(metadata.demo.origin, DemoOrigin::Homepage);
    }

    #[test]
    fn blank_curated_demo_counts_as_pending()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        assert_eq!(catalog.demo("blank_demo"), Some(&CuratedDemo::Pending));
    }

    #[test]
    fn empty_homepage_is_not_a_demo()
    {
        let catalog = CuratedCatalog::default();
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);
        let mut repository = sample_repository("tool",);
        repository.homepage = Some(String::new(),);

        assert_eq!(resolver.resolve(&repository,).demo.origin, DemoOrigin::Source);
    }

    #[test]
    fn description_falls_back_through_repository_to_generic_sentence()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);

        let curated = resolver.resolve(&sample_repository("Weather-Dashboard",),);
        assert_eq!(curated.description, "Forecasts and maps.");

        let mut described = sample_repository("cli-tool",);
        described.description = Some("Command line helper".to_owned(),);
        assert_eq!(resolver.resolve(&described,).description, "Command line helper");

        let bare = resolver.resolve(&sample_repository("cli-tool",),);
        assert_eq!(bare.description, GENERIC_DESCRIPTION);
    }

    #[test]
    fn status_defaults_to_dev()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);

        assert_eq!(resolver.resolve(&sample_repository("sentiment_analysis_app",),).status, "AI/ML");
        assert_eq!(resolver.resolve(&sample_repository("unknown",),).status, DEFAULT_STATUS);
    }

    #[test]
    fn image_falls_back_to_default()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);

        assert_eq!(
            resolver.resolve(&sample_repository("weather-dashboard",),).image_url,
            "https://img.example/w.png"
        );
        assert_eq!(resolver.resolve(&sample_repository("other",),).image_url, DEFAULT_IMAGE);
    }

    #[test]
    fn lookups_are_exact_not_substring()
    {
        let catalog = CuratedCatalog::from_tables(&tables(),).expect("valid catalog",);
        let resolver = MetadataResolver::new(&catalog, DEFAULT_IMAGE,);

        let metadata = resolver.resolve(&sample_repository("weather-dashboard-v2",),);
        assert_eq!(metadata.status, DEFAULT_STATUS);
        assert_eq!(metadata.image_url, DEFAULT_IMAGE);
        assert_eq!(metadata.demo.origin, DemoOrigin::Source);
    }

    #[test]
    fn rejects_keys_that_collide_after_normalization()
    {
        let mut tables = CurationTables::default();
        tables.statuses.insert("kda-campusconnect".to_owned(), "LIVE".to_owned(),);
        tables.statuses.insert("kda_campusconnect".to_owned(), "DEV".to_owned(),);

        let error = CuratedCatalog::from_tables(&tables,).expect_err("expected collision",);
        match error {
            Error::Validation {
                message,
            } => {
                assert!(message.contains("curation.statuses"));
                assert!(message.contains("kda_campusconnect"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn same_key_in_different_tables_is_allowed()
    {
        let mut tables = CurationTables::default();
        tables.statuses.insert("kda-campusconnect".to_owned(), "LIVE".to_owned(),);
        tables.images.insert("kda_campusconnect".to_owned(), "https://img.example/k.png".to_owned(),);

        assert!(CuratedCatalog::from_tables(&tables,).is_ok());
    }

    #[test]
    fn sample_portfolio_configuration_builds_a_catalog()
    {
        let config = crate::config::parse_config(include_str!("../portfolio.yaml"),)
            .expect("sample configuration parses",);
        let catalog = CuratedCatalog::from_tables(&config.curation,).expect("no collisions",);

        assert_eq!(catalog.status("hv_system_v2"), Some("FYP"));
        assert_eq!(catalog.demo("recording_system"), Some(&CuratedDemo::Pending));
    }
}
