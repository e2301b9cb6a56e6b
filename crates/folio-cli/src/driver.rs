use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use folio_config::Config;
use folio_engine::parse_str;
use thiserror::Error;

use crate::render::{RenderDocument, Renderer};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("No files matching: {0}")]
    NoMatch(String),
    #[error("Invalid glob pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("An output path needs a single input, but {count} files matched")]
    AmbiguousOutput { count: usize },
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to render {path}: {source}")]
    RenderFailure { path: PathBuf, source: io::Error },
}

/// One input file and where its rendering goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.converted > 0
    }
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Expands `input` into the files to convert.
///
/// A glob must match at least one file; a plain path must exist.
pub fn resolve_inputs(input: &str) -> Result<Vec<PathBuf>, ConvertError> {
    if !is_glob(input) {
        let path = PathBuf::from(input);
        if !path.is_file() {
            return Err(ConvertError::FileNotFound(path));
        }
        return Ok(vec![path]);
    }

    let paths = glob::glob(input).map_err(|source| ConvertError::InvalidPattern {
        pattern: input.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => log::debug!("skipping non-file match {}", path.display()),
            Err(e) => log::warn!("skipping unreadable match: {e}"),
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(ConvertError::NoMatch(input.to_string()));
    }
    Ok(files)
}

/// Where a rendering of `input` goes when no output path was given.
pub fn default_output(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let output = input.with_extension(extension);
    match (output_dir, output.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => output,
    }
}

/// Resolves the input and pairs every file with its output path.
pub fn plan(
    input: &str,
    output: Option<&Path>,
    config: &Config,
    extension: &str,
) -> Result<Vec<Conversion>, ConvertError> {
    let inputs = resolve_inputs(input)?;

    if let Some(output) = output {
        if inputs.len() != 1 {
            return Err(ConvertError::AmbiguousOutput {
                count: inputs.len(),
            });
        }
        return Ok(inputs
            .into_iter()
            .map(|input| Conversion {
                input,
                output: output.to_path_buf(),
            })
            .collect());
    }

    Ok(inputs
        .into_iter()
        .map(|input| {
            let output = default_output(&input, config.output_dir.as_deref(), extension);
            Conversion { input, output }
        })
        .collect())
}

/// Reads, parses, renders and writes a single file.
pub fn convert(job: &Conversion, renderer: &dyn Renderer) -> Result<(), ConvertError> {
    let started = Instant::now();

    let source = fs::read_to_string(&job.input).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::FileNotFound(job.input.clone())
        } else {
            ConvertError::Read {
                path: job.input.clone(),
                source,
            }
        }
    })?;

    let blocks = parse_str(&source);
    log::debug!("{}: {} block(s)", job.input.display(), blocks.len());

    let doc = RenderDocument::new(&job.input, blocks);
    let rendered = renderer.render(&doc);

    let render_failure = |source| ConvertError::RenderFailure {
        path: job.output.clone(),
        source,
    };
    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(render_failure)?;
    }
    fs::write(&job.output, rendered).map_err(render_failure)?;

    log::debug!(
        "converted {} in {:?}",
        job.input.display(),
        started.elapsed()
    );
    Ok(())
}

/// Converts every planned file, isolating failures per file.
pub fn run_batch(jobs: &[Conversion], renderer: &dyn Renderer, quiet: bool) -> Summary {
    let mut summary = Summary::default();

    if !quiet && jobs.len() > 1 {
        println!("Converting {} file(s)...", jobs.len());
    }

    for job in jobs {
        match convert(job, renderer) {
            Ok(()) => {
                summary.converted += 1;
                if !quiet {
                    println!("✓ {} → {}", job.input.display(), job.output.display());
                }
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("{e}");
                eprintln!("✗ {}: {e}", job.input.display());
            }
        }
    }

    if !quiet && jobs.len() > 1 {
        println!(
            "\nConverted {} of {} file(s), {} failed",
            summary.converted,
            jobs.len(),
            summary.failed
        );
    }

    summary
}
