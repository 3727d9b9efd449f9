//! Drives one extraction run from parsed arguments.
//!
//! 1. Resolve configuration (config file, then flags)
//! 2. Build the session (validates locales, query and function name)
//! 3. Parse HTML inputs, then JS inputs, one file at a time
//! 4. Merge and write every locale file in parallel

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use super::{args::Arguments, exit_status::ExitStatus, inputs::collect_files};
use crate::config::{Config, load_config, load_config_file};
use crate::core::{MergeReport, ParseError, Session, SourceKind};

/// An input file that could not be parsed (only collected with `--keep-going`).
#[derive(Debug)]
pub struct FileParseFailure {
    pub path: PathBuf,
    pub error: ParseError,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunResult {
    pub report: MergeReport,
    pub output_directory: PathBuf,
    pub files_parsed: usize,
    pub key_count: usize,
    pub parse_failures: Vec<FileParseFailure>,
}

impl RunResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.report.is_success() && self.parse_failures.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

pub fn run(args: &Arguments) -> Result<RunResult> {
    let config = resolve_config(args)?;
    let options = config.to_options()?;
    let output_directory = options.output_directory().to_path_buf();
    let mut session = Session::new(options)?;

    let html_files = collect_files(&config.html, SourceKind::Html)?;
    let js_files = collect_files(&config.js, SourceKind::Js)?;
    if html_files.is_empty() && js_files.is_empty() {
        warn!("no input files, locale files will only be normalized");
    }

    let mut parse_failures = Vec::new();
    let mut files_parsed = 0;
    let inputs = html_files
        .iter()
        .map(|path| (path, SourceKind::Html))
        .chain(js_files.iter().map(|path| (path, SourceKind::Js)));

    for (path, kind) in inputs {
        match parse_file(&mut session, path, kind)? {
            Ok(()) => files_parsed += 1,
            Err(error) if args.keep_going => {
                warn!(file = %path.display(), "{}", error);
                parse_failures.push(FileParseFailure {
                    path: path.clone(),
                    error,
                });
            }
            Err(error) => {
                return Err(anyhow!(error))
                    .with_context(|| format!("Failed to parse {}", path.display()));
            }
        }
    }

    let key_count = session.registry().len();
    let report = session.output();

    Ok(RunResult {
        report,
        output_directory,
        files_parsed,
        key_count,
        parse_failures,
    })
}

/// Load the explicit or discovered config file and apply flag overrides.
fn resolve_config(args: &Arguments) -> Result<Config> {
    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            let loaded = load_config(&cwd)?;
            if let Some(path) = &loaded.path {
                info!(config = %path.display(), "using config file");
            }
            loaded.config
        }
    };

    let config = args.apply_to(config);
    config.validate()?;
    Ok(config)
}

/// Read and extract one file. The outer error is fatal (unreadable file),
/// the inner one is a syntax error in the file.
fn parse_file(
    session: &mut Session,
    path: &Path,
    kind: SourceKind,
) -> Result<Result<(), ParseError>> {
    info!(file = %path.display(), "parsing");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let extracted = match kind {
        SourceKind::Html => session.extract_from_html(&content),
        SourceKind::Js => session.extract_from_js(&content),
    };
    Ok(extracted.map(|_| ()))
}
