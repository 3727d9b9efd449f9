use std::{
    fmt,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::Deserialize;

use crate::core::{ConfigError, locale};

pub const DEFAULT_HTML_QUERY: &str = "[data-localize]";
pub const DEFAULT_JS_FUNCTION: &str = "localize";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./lang";

/// Serialization format of a locale document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Output type as configured by the user.
///
/// Doubles as the locale file extension, so `yml` and `yaml` both produce
/// YAML documents but with different file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Json,
    Yaml,
    Yml,
}

impl OutputType {
    pub fn extension(self) -> &'static str {
        match self {
            OutputType::Json => "json",
            OutputType::Yaml => "yaml",
            OutputType::Yml => "yml",
        }
    }

    pub fn format(self) -> OutputFormat {
        match self {
            OutputType::Json => OutputFormat::Json,
            OutputType::Yaml | OutputType::Yml => OutputFormat::Yaml,
        }
    }
}

/// Session configuration, fixed once the session is constructed.
///
/// Locales are validated by [`Options::new`]; the HTML query and JS function
/// name are validated when the extractors are built in
/// [`Session::new`](crate::core::Session::new).
#[derive(Debug, Clone)]
pub struct Options {
    locales: Vec<String>,
    html_query: String,
    js_function: String,
    output_directory: PathBuf,
    output_type: OutputType,
    purge: bool,
}

impl Options {
    /// Create options for the given locales with every other setting at its default.
    ///
    /// Fails if the list is empty or any tag is not a valid BCP-47 tag.
    /// Repeated tags are kept once, in first-seen order and spelling. Tags
    /// are compared case-insensitively.
    pub fn new<I, S>(locales: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in locales {
            let tag = tag.into();
            if !locale::validate(&tag) {
                return Err(ConfigError::InvalidLocale(tag));
            }
            if !unique.iter().any(|seen| seen.eq_ignore_ascii_case(&tag)) {
                unique.push(tag);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::MissingLocales);
        }

        Ok(Self {
            locales: unique,
            html_query: DEFAULT_HTML_QUERY.to_string(),
            js_function: DEFAULT_JS_FUNCTION.to_string(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            output_type: OutputType::default(),
            purge: false,
        })
    }

    pub fn with_html_query(mut self, query: impl Into<String>) -> Self {
        self.html_query = query.into();
        self
    }

    pub fn with_js_function(mut self, name: impl Into<String>) -> Self {
        self.js_function = name.into();
        self
    }

    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    pub fn with_purge(mut self, purge: bool) -> Self {
        self.purge = purge;
        self
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn html_query(&self) -> &str {
        &self.html_query
    }

    pub fn js_function(&self) -> &str {
        &self.js_function
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    pub fn purge(&self) -> bool {
        self.purge
    }

    /// Path of the locale file for `locale`: `<output_directory>/<locale>.<ext>`.
    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", locale, self.output_type.extension()))
    }
}
