// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Project card rendering.
//!
//! Rendering is pure: a [`ProjectCard`] is derived from an enriched repository
//! and its resolved metadata, then turned into an HTML fragment. Every piece of
//! interpolated text is escaped.

use std::{borrow::Cow, fmt::Write as _, sync::LazyLock};

use rayon::prelude::*;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::{
    config::PortfolioConfig,
    curation::{CuratedMetadata, DemoLink},
    model::EnrichedRepository,
};

/// Category shown when a repository has neither topics nor a language.
pub const FALLBACK_CATEGORY: &str = "Software Project";

/// First character of every ASCII word (`[A-Za-z0-9_]+`).
static WORD_START: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[A-Za-z0-9_]",).expect("valid word start pattern",),);

/// Display switches and thresholds applied while building cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct CardOptions
{
    /// Repositories with more stars than this are featured.
    pub featured_star_threshold: u64,
    /// Render one tag per language.
    pub show_languages:          bool,
    /// Render star count and size.
    pub show_stats:              bool,
    /// Render the date of the last update.
    pub show_last_updated:       bool,
}

impl CardOptions
{
    /// Collects the card options from the configuration document.
    pub fn from_config(config: &PortfolioConfig,) -> Self
    {
        Self {
            featured_star_threshold: config.github.featured_star_threshold,
            show_languages:          config.projects.show_languages,
            show_stats:              config.projects.show_stats,
            show_last_updated:       config.projects.show_last_updated,
        }
    }
}

impl Default for CardOptions
{
    fn default() -> Self
    {
        Self {
            featured_star_threshold: crate::config::DEFAULT_FEATURED_STAR_THRESHOLD,
            show_languages:          true,
            show_stats:              true,
            show_last_updated:       true,
        }
    }
}

/// Optional repository statistics shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct CardStats
{
    /// Stargazer count.
    pub stars: u64,
    /// Human readable repository size.
    pub size:  String,
}

/// View of one repository ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct ProjectCard
{
    /// Raw repository name.
    pub name:        String,
    /// Humanized title.
    pub title:       String,
    /// Star count exceeds the featured threshold.
    pub featured:    bool,
    /// Cover image URL.
    pub image_url:   String,
    /// Repository source page.
    pub source_url:  String,
    /// Demo affordance.
    pub demo:        DemoLink,
    /// Category label.
    pub category:    String,
    /// Status tag.
    pub status:      String,
    /// Description text.
    pub description: String,
    /// Language tags.
    pub languages:   Vec<String,>,
    /// Statistics, when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats:       Option<CardStats,>,
    /// Date of the last update (`YYYY-MM-DD`), when enabled and known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated:     Option<String,>,
}

impl ProjectCard
{
    /// Combines an enriched repository with its resolved metadata.
    pub fn build(
        repository: &EnrichedRepository,
        metadata: CuratedMetadata,
        options: &CardOptions,
    ) -> Self
    {
        let summary = &repository.summary;

        let languages = if !options.show_languages {
            Vec::new()
        } else if repository.languages.is_empty() {
            summary.language.iter().cloned().collect()
        } else {
            repository.languages.clone()
        };

        let stats = options.show_stats.then(|| CardStats {
            stars: summary.stargazers_count,
            size:  format_size(summary.size,),
        },);

        let updated = if options.show_last_updated {
            summary.updated_at.as_deref().and_then(|stamp| stamp.get(..10,),).map(str::to_owned,)
        } else {
            None
        };

        Self {
            name: summary.name.clone(),
            title: humanize_title(&summary.name,),
            featured: summary.stargazers_count > options.featured_star_threshold,
            image_url: metadata.image_url,
            source_url: summary.html_url.clone(),
            demo: metadata.demo,
            category: category_label(&summary.topics, summary.language.as_deref(),),
            status: metadata.status,
            description: metadata.description,
            languages,
            stats,
            updated,
        }
    }

    /// Renders the card as an HTML fragment.
    pub fn to_markup(&self,) -> String
    {
        let mut html = String::with_capacity(1024,);
        let featured = if self.featured { " featured" } else { "" };

        let _ = writeln!(
            html,
            "<div class=\"project-card{featured}\" data-github=\"true\" data-repo=\"{}\" data-source=\"{}\">",
            escape_html(&self.name,),
            escape_html(&self.source_url,),
        );
        let _ = writeln!(
            html,
            "  <div class=\"project-image\">\n    <img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(&self.image_url,),
            escape_html(&self.name,),
        );
        html.push_str("    <div class=\"project-overlay\">\n      <div class=\"project-links\">\n",);
        let _ = writeln!(
            html,
            "        <a href=\"{}\" class=\"project-link\" target=\"_blank\" rel=\"noopener\"><span>CODE</span></a>",
            escape_html(&self.source_url,),
        );
        let _ = writeln!(
            html,
            "        <a href=\"{}\" class=\"project-link demo-link\" data-demo-origin=\"{}\" target=\"_blank\" rel=\"noopener\"><span>DEMO</span></a>",
            escape_html(&self.demo.url,),
            demo_origin_label(&self.demo,),
        );
        html.push_str("      </div>\n    </div>\n  </div>\n",);

        html.push_str("  <div class=\"project-content\">\n    <div class=\"project-header\">\n",);
        let _ = writeln!(
            html,
            "      <div class=\"project-category\">{}</div>",
            escape_html(&self.category,)
        );
        let _ = writeln!(
            html,
            "      <div class=\"project-status {}\">{}</div>",
            status_class(&self.status,),
            escape_html(&self.status,),
        );
        html.push_str("    </div>\n",);
        let _ = writeln!(html, "    <h3 class=\"project-title\">{}</h3>", escape_html(&self.title,));
        let _ = writeln!(
            html,
            "    <p class=\"project-description\">{}</p>",
            escape_html(&self.description,)
        );

        if let Some(stats,) = &self.stats {
            let _ = writeln!(
                html,
                "    <div class=\"project-stats\"><span class=\"project-stars\">&#9733; {}</span><span class=\"project-size\">{}</span></div>",
                stats.stars,
                escape_html(&stats.size,),
            );
        }
        if let Some(updated,) = &self.updated {
            let _ = writeln!(
                html,
                "    <div class=\"project-updated\">Updated {}</div>",
                escape_html(updated,)
            );
        }

        html.push_str("    <div class=\"project-tech\">",);
        for language in &self.languages {
            let _ = write!(html, "<span class=\"tech-tag\">{}</span>", escape_html(language,));
        }
        html.push_str("</div>\n  </div>\n</div>\n",);

        html
    }
}

/// Renders all cards, keeping their order.
pub fn render_cards(cards: &[ProjectCard],) -> String
{
    cards.par_iter().map(ProjectCard::to_markup,).collect::<Vec<String,>>().concat()
}

/// Turns a repository name into a display title.
///
/// Hyphens become spaces and the first character of every ASCII word is
/// uppercased; the rest of each word is left untouched.
///
/// # Examples
///
/// ```
/// use gitfolio::humanize_title;
///
/// assert_eq!(humanize_title("kda-campusconnect"), "Kda Campusconnect");
/// assert_eq!(humanize_title("HV-System-v2"), "HV System V2");
/// ```
pub fn humanize_title(name: &str,) -> String
{
    let spaced = name.replace('-', " ",);
    WORD_START
        .replace_all(&spaced, |captures: &Captures<'_,>| captures[0].to_ascii_uppercase(),)
        .into_owned()
}

/// Picks the category label: first topic, then primary language, then a
/// generic label. The topic's first character is capitalized.
pub fn category_label(topics: &[String], language: Option<&str,>,) -> String
{
    if let Some(topic,) = topics.first().filter(|topic| !topic.is_empty(),) {
        return capitalize_first(topic,);
    }

    language
        .filter(|value| !value.trim().is_empty(),)
        .unwrap_or(FALLBACK_CATEGORY,)
        .to_owned()
}

/// Formats a size in KiB as `"<n> KB"` below one MiB and `"<n.n> MB"` above.
///
/// Megabytes are rounded to one decimal with halves rounded up.
pub fn format_size(size_kib: u64,) -> String
{
    if size_kib < 1024 {
        format!("{size_kib} KB")
    } else {
        let tenths = size_kib.saturating_mul(10,).saturating_add(512,) / 1024;
        format!("{}.{} MB", tenths / 10, tenths % 10)
    }
}

fn capitalize_first(value: &str,) -> String
{
    let mut characters = value.chars();
    match characters.next() {
        Some(first,) => first.to_uppercase().chain(characters,).collect(),
        None => String::new(),
    }
}

fn demo_origin_label(demo: &DemoLink,) -> &'static str
{
    match demo.origin {
        crate::curation::DemoOrigin::Curated => "curated",
        crate::curation::DemoOrigin::Homepage => "homepage",
        crate::curation::DemoOrigin::Source => "source",
    }
}

/// CSS class for a status tag: lowercase ASCII with other characters mapped
/// to `-` (`AI/ML` becomes `ai-ml`).
fn status_class(status: &str,) -> String
{
    status
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch.to_ascii_lowercase() } else { '-' },)
        .collect()
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub(crate) fn escape_html(value: &str,) -> Cow<'_, str,>
{
    if value.chars().any(|character| matches!(character, '&' | '<' | '>' | '"' | '\''),) {
        let mut escaped = String::with_capacity(value.len() + 8,);
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;",),
                '<' => escaped.push_str("&lt;",),
                '>' => escaped.push_str("&gt;",),
                '"' => escaped.push_str("&quot;",),
                '\'' => escaped.push_str("&#39;",),
                other => escaped.push(other,),
            }
        }
        Cow::Owned(escaped,)
    } else {
        Cow::Borrowed(value,)
    }
}
