//! Error types for the extraction and merge engine.
//!
//! Each error is scoped to the unit it aborts:
//! - [`ConfigError`]: the whole session (raised before any extraction)
//! - [`ParseError`]: a single input file
//! - [`MergeError`]: a single locale file

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::core::OutputFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing supported locales")]
    MissingLocales,

    #[error("{0} is not a bcp47 compliant locale")]
    InvalidLocale(String),

    #[error("invalid html query `{query}`: {reason}")]
    InvalidHtmlQuery { query: String, reason: String },

    #[error("invalid js function name `{0}`: expected an identifier")]
    InvalidJsFunction(String),
}

/// Kind of source text that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Html,
    Js,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Html => write!(f, "HTML"),
            SourceKind::Js => write!(f, "Javascript"),
        }
    }
}

/// A syntax diagnostic raised while parsing an input.
///
/// `line` and `column` are 1-based and only known for JS sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("error in your {source_kind} syntax{}: {message}", location_suffix(.line, .column))]
pub struct ParseError {
    pub source_kind: SourceKind,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

fn location_suffix(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" at {}:{}", line, column),
        (Some(line), None) => format!(" at line {}", line),
        _ => String::new(),
    }
}

impl ParseError {
    pub fn html(message: impl Into<String>) -> Self {
        Self {
            source_kind: SourceKind::Html,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn js(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            source_kind: SourceKind::Js,
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("cannot parse {} {format} file: {reason}", .path.display())]
    CannotParse {
        path: PathBuf,
        format: OutputFormat,
        reason: String,
    },

    #[error("cannot serialize {}: {reason}", .path.display())]
    Serialize { path: PathBuf, reason: String },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the locale file the failed merge targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            MergeError::CannotParse { path, .. }
            | MergeError::Serialize { path, .. }
            | MergeError::Io { path, .. } => path,
        }
    }
}
