// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line interface for the gitfolio binary.
//!
//! The CLI renders the project gallery into a file, prints the final gallery
//! state as JSON, and exposes the name normalization used for curated lookups.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
    time::Duration,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use gitfolio::{
    CuratedCatalog, Error, FileContainer, GalleryState, GitHubHost, Layout, NormalizedName,
    PortfolioConfig, Showcase, load_config,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Command line interface for rendering a curated GitHub project gallery.
#[derive(Debug, Parser,)]
#[command(name = "gitfolio", version, about = "Render a curated GitHub project gallery")]
struct Cli
{
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args,)]
struct GlobalArgs
{
    /// Personal access token used for GitHub API requests.
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String,>,

    /// Overrides `github.username` from the configuration file.
    #[arg(long = "username", env = "GITFOLIO_USERNAME", global = true)]
    username: Option<String,>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long = "log-level", env = "GITFOLIO_LOG", default_value = "info", global = true)]
    log_level: String,
}

#[derive(Debug, Subcommand,)]
enum Command
{
    /// Run the pipeline and write the gallery markup.
    Render(RenderArgs,),
    /// Run the pipeline and print the final gallery state as JSON.
    Projects(ProjectsArgs,),
    /// Print the normalized lookup key of each name.
    Normalize(NormalizeArgs,),
}

#[derive(Debug, Args,)]
struct RenderArgs
{
    /// Path to the YAML portfolio configuration.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// File receiving the gallery markup.
    #[arg(long = "output", value_name = "PATH", default_value = "projects.html")]
    output: PathBuf,

    /// Write a complete HTML page instead of a bare fragment.
    #[arg(long = "page", action = ArgAction::SetTrue)]
    page: bool,

    /// Offer a retry on the terminal after an empty or failed run.
    #[arg(long = "interactive", action = ArgAction::SetTrue)]
    interactive: bool,
}

#[derive(Debug, Args,)]
struct ProjectsArgs
{
    /// Path to the YAML portfolio configuration.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct NormalizeArgs
{
    /// Repository names to normalize.
    #[arg(value_name = "NAME", required = true)]
    names: Vec<String,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    if let Err(error,) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

async fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    init_tracing(&cli.global.log_level,);

    match cli.command {
        Command::Render(args,) => run_render(&cli.global, args,).await,
        Command::Projects(args,) => run_projects(&cli.global, args,).await,
        Command::Normalize(args,) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_normalized(&mut handle, &args.names,)
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by `level` when
/// the variable is absent or invalid.
fn init_tracing(level: &str,)
{
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level,),)
        .unwrap_or_else(|_| EnvFilter::new("info",),);

    let _ = tracing_subscriber::registry()
        .with(filter,)
        .with(fmt::layer().with_writer(io::stderr,).with_target(false,).compact(),)
        .try_init();
}

fn prepare_config(path: &Path, global: &GlobalArgs,) -> Result<PortfolioConfig, Error,>
{
    let mut config = load_config(path,)?;

    if let Some(username,) = global.username.as_deref() {
        config.github.override_username(username,)?;
    }

    Ok(config,)
}

async fn run_render(global: &GlobalArgs, args: RenderArgs,) -> Result<(), Error,>
{
    let config = prepare_config(&args.config, global,)?;
    let catalog = CuratedCatalog::from_tables(&config.curation,)?;
    let host = GitHubHost::new(&config.github.api_base, global.token.as_deref(),)?;

    let layout = if args.page { Layout::Page } else { Layout::Fragment };
    let mut container = FileContainer::new(args.output, layout,);
    let mut showcase = Showcase::new(host, &config, &catalog,);

    loop {
        let pb = spinner(format!("Loading projects for {}...", config.github.username),);
        let state = showcase.load(&mut container,).await;
        pb.finish_and_clear();
        let state = state?;

        info!("Wrote {} gallery to {}", state.name(), container.path().display());

        if !(args.interactive && state.is_retryable()) {
            break;
        }

        let stdin = io::stdin();
        let stderr = io::stderr();
        if !prompt_retry(&mut stdin.lock(), &mut stderr.lock(), &state,)? {
            break;
        }
    }

    Ok((),)
}

async fn run_projects(global: &GlobalArgs, args: ProjectsArgs,) -> Result<(), Error,>
{
    let config = prepare_config(&args.config, global,)?;
    let catalog = CuratedCatalog::from_tables(&config.curation,)?;
    let host = GitHubHost::new(&config.github.api_base, global.token.as_deref(),)?;
    let showcase = Showcase::new(host, &config, &catalog,);

    let pb = spinner(format!("Collecting projects for {}...", config.github.username),);
    let state = showcase.collect().await;
    pb.finish_and_clear();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_state_document(&mut handle, &state, args.pretty,)
}

fn spinner(message: String,) -> ProgressBar
{
    let pb = ProgressBar::new_spinner();
    if let Ok(style,) = ProgressStyle::default_spinner().template("{spinner:.yellow} [{elapsed_precise}] {msg}",) {
        pb.set_style(style,);
    }
    pb.set_message(message,);
    pb.enable_steady_tick(Duration::from_millis(100,),);
    pb
}

fn write_state_document<W: Write,>(
    writer: &mut W,
    state: &GalleryState,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, state,)?;
    } else {
        serde_json::to_writer(writer, state,)?;
    }

    Ok((),)
}

fn write_normalized<W: Write,>(writer: &mut W, names: &[String],) -> Result<(), Error,>
{
    for name in names {
        writeln!(writer, "{}", NormalizedName::new(name,))
            .map_err(|e| Error::service(format!("failed to write output: {e}"),),)?;
    }

    Ok((),)
}

/// Asks whether to run the pipeline again. Only `y`/`yes` (any case) confirm;
/// end of input declines.
fn prompt_retry<R: BufRead, W: Write,>(
    input: &mut R,
    output: &mut W,
    state: &GalleryState,
) -> Result<bool, Error,>
{
    write!(output, "Gallery is {}. Retry? [y/N] ", state.name())
        .and_then(|()| output.flush(),)
        .map_err(|e| Error::service(format!("failed to write prompt: {e}"),),)?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer,)
        .map_err(|e| Error::service(format!("failed to read answer: {e}"),),)?;

    if read == 0 {
        return Ok(false,);
    }

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y",) || answer.eq_ignore_ascii_case("yes",),)
}
