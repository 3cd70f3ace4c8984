// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gitfolio::{
    CardOptions, CuratedCatalog, EnrichedRepository, FilterPolicy, MetadataResolver,
    NormalizedName, ProjectCard, RepositorySummary, filter_repositories, parse_config,
    render_cards,
};

const CONFIG: &str = r"
github:
  username: octocat
filter:
  exclude: [dotfiles, sandbox]
curation:
  descriptions:
    weather-dashboard: Real-time weather dashboard
  statuses:
    weather-dashboard: LIVE
    sentiment_analysis_app: AI/ML
  demos:
    weather-dashboard: https://weather.example
    recording_system: null
";

fn repositories(count: usize,) -> Vec<RepositorySummary,>
{
    (0..count)
        .map(|i| RepositorySummary {
            name:             format!("Project-{i}-Dashboard"),
            description:      (i % 3 == 0).then(|| format!("Repository number {i}"),),
            stargazers_count: (i % 11) as u64,
            fork:             i % 7 == 0,
            private:          false,
            homepage:         None,
            html_url:         format!("https://github.com/octocat/project-{i}"),
            language:         Some("Rust".to_owned(),),
            topics:           vec!["web-app".to_owned()],
            size:             (i as u64) * 37,
            updated_at:       Some("2024-05-01T10:00:00Z".to_owned(),),
        },)
        .collect()
}

fn benchmark_parse_config(c: &mut Criterion,)
{
    c.bench_function("parse_portfolio_config", |b| {
        b.iter(|| parse_config(black_box(CONFIG,),).expect("parse failed",),)
    },);
}

fn benchmark_normalize(c: &mut Criterion,)
{
    let names = ["Weather-Dashboard", "kda_campusconnect", "Café Finder 2.0", "exco-budget-management-system"];

    c.bench_function("normalize_names", |b| {
        b.iter(|| {
            for name in names {
                black_box(NormalizedName::new(black_box(name,),),);
            }
        },)
    },);
}

fn benchmark_filter(c: &mut Criterion,)
{
    let config = parse_config(CONFIG,).expect("parse failed",);
    let policy = FilterPolicy::from_config(&config.github, &config.filter,);
    let input = repositories(100,);

    c.bench_function("filter_100_repositories", |b| {
        b.iter(|| filter_repositories(black_box(input.clone(),), &policy,),)
    },);
}

fn benchmark_render(c: &mut Criterion,)
{
    let config = parse_config(CONFIG,).expect("parse failed",);
    let catalog = CuratedCatalog::from_tables(&config.curation,).expect("catalog",);
    let resolver = MetadataResolver::new(&catalog, &config.projects.default_image,);
    let options = CardOptions::from_config(&config,);
    let enriched: Vec<EnrichedRepository,> = repositories(100,)
        .into_iter()
        .map(|summary| EnrichedRepository {
            summary,
            languages: vec!["Rust".to_owned(), "TypeScript".to_owned(), "CSS".to_owned()],
        },)
        .collect();

    c.bench_function("render_100_cards", |b| {
        b.iter(|| {
            let cards: Vec<ProjectCard,> = enriched
                .iter()
                .map(|repository| {
                    ProjectCard::build(repository, resolver.resolve(&repository.summary,), &options,)
                },)
                .collect();
            black_box(render_cards(&cards,),)
        },)
    },);
}

criterion_group!(
    benches,
    benchmark_parse_config,
    benchmark_normalize,
    benchmark_filter,
    benchmark_render
);
criterion_main!(benches);
