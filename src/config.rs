use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::core::{
    ConfigError, Options, OutputType,
    options::{DEFAULT_HTML_QUERY, DEFAULT_JS_FUNCTION, DEFAULT_OUTPUT_DIRECTORY},
};

pub const CONFIG_FILE_NAME: &str = ".localizerc.json";

/// Contents of `.localizerc.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub html: Vec<String>,
    #[serde(default)]
    pub js: Vec<String>,
    #[serde(default = "default_html_query")]
    pub html_query: String,
    #[serde(default = "default_js_function")]
    pub js_function: String,
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
    #[serde(default)]
    pub output_type: OutputType,
    #[serde(default)]
    pub purge: bool,
}

fn default_html_query() -> String {
    DEFAULT_HTML_QUERY.to_string()
}

fn default_js_function() -> String {
    DEFAULT_JS_FUNCTION.to_string()
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            html: Vec::new(),
            js: Vec::new(),
            html_query: default_html_query(),
            js_function: default_js_function(),
            output_directory: default_output_directory(),
            output_type: OutputType::default(),
            purge: false,
        }
    }
}

/// Check if an input entry contains glob wildcards.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

impl Config {
    /// Validate input entries.
    ///
    /// Returns an error if any glob pattern in `html` or `js` is invalid.
    pub fn validate(&self) -> Result<()> {
        for (field, entries) in [("html", &self.html), ("js", &self.js)] {
            for pattern in entries.iter().filter(|p| is_glob_pattern(p)) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", field, pattern)
                })?;
            }
        }
        Ok(())
    }

    /// Build validated session options from this configuration.
    pub fn to_options(&self) -> Result<Options, ConfigError> {
        Ok(Options::new(self.locales.iter().cloned())?
            .with_html_query(&self.html_query)
            .with_js_function(&self.js_function)
            .with_output_directory(&self.output_directory)
            .with_output_type(self.output_type)
            .with_purge(self.purge))
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load the config file found from `start_dir` upwards, or defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
