//! Main CLI application structure

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Environment, OutputMode};
use crate::domain::{build_forest, normalize_ids};
use crate::render::flavor::{self, RandomPicker};
use crate::render::{ListRenderer, Render, SlackRenderer};
use crate::tracker::{collect_tasks, HttpFetcher};

#[derive(Parser)]
#[command(name = "taskforest")]
#[command(author, version)]
#[command(about = "Render issue-tracker task hierarchies from a batch of issue IDs")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the configured output mode (list, slack-attachments)
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Parses arguments and runs one batch: stdin IDs in, one rendering out
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;
    let environment = Environment::from_env();
    let mode_value = cli.output.unwrap_or_else(|| config.output.clone());

    // The whole batch is buffered before any processing starts.
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read issue IDs from stdin")?;
    let ids = normalize_ids(&input);
    tracing::debug!(count = ids.len(), "issue IDs read from stdin");

    let Some(mode) = OutputMode::parse(&mode_value) else {
        tracing::warn!(mode = %mode_value, "unrecognized output mode, printing nothing");
        return Ok(());
    };

    let fetcher = HttpFetcher::new(&config);
    let tasks = collect_tasks(&fetcher, &ids).await;
    tracing::debug!(
        fetched = tasks.len(),
        requested = ids.len(),
        "fetch batch settled"
    );

    let forest = build_forest(tasks);
    let rendered = match mode {
        OutputMode::List => ListRenderer::new(&config.api_host).render(&forest)?,
        OutputMode::SlackAttachments => {
            let text = flavor::compose(environment, &mut RandomPicker::new());
            SlackRenderer::new(&config.api_host, config.mentions.clone(), text).render(&forest)?
        }
    };

    println!("{rendered}");
    Ok(())
}

// Diagnostics go to stderr; stdout carries only the rendering.
fn init_tracing(verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::from_default_env(),
        _ if verbose => EnvFilter::new("taskforest=debug"),
        _ => EnvFilter::new("taskforest=warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
