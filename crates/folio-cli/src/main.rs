//! folio - Markdown to printable, paginated HTML

mod driver;
mod render;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_config::Config;

use crate::render::{HtmlRenderer, Renderer};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Convert markdown to printable, paginated HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio README.md                Write README.html next to README.md
    folio doc.md out/manual.html   Choose the output file
    folio 'docs/*.md'              Convert every match (quote the glob)")]
struct Cli {
    /// Markdown file or glob pattern
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (single input only)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/folio/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only report failures
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every file converted.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let renderer = HtmlRenderer::new(config.render.clone());

    let jobs = driver::plan(
        &cli.input,
        cli.output.as_deref(),
        &config,
        renderer.extension(),
    )?;
    log::debug!("resolved {} input(s) from {}", jobs.len(), cli.input);

    let summary = driver::run_batch(&jobs, &renderer, cli.quiet);
    Ok(summary.is_success())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load().context("Failed to load config file")?,
    };

    match loaded {
        Some(config) => {
            log::debug!(
                "using config from {}",
                explicit
                    .map(Path::to_path_buf)
                    .unwrap_or_else(Config::config_path)
                    .display()
            );
            Ok(config)
        }
        None => {
            log::debug!("no config file, using defaults");
            Ok(Config::default())
        }
    }
}
