//! CLI argument definitions using clap.
//!
//! Every option can also be set in `.localizerc.json`; flags given on the
//! command line take precedence over the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::core::OutputType;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Locales supported by your app, e.g. en-US,fr-FR
    #[arg(short, long, value_delimiter = ',', value_name = "LOCALES")]
    pub locales: Vec<String>,

    /// HTML files, directories or glob patterns to parse
    #[arg(short = 'H', long, value_delimiter = ',', value_name = "PATHS")]
    pub html: Vec<String>,

    /// JS files, directories or glob patterns to parse
    #[arg(short, long, value_delimiter = ',', value_name = "PATHS")]
    pub js: Vec<String>,

    /// Output directory of the locale files [default: ./lang]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Format of the locale files [default: json]
    #[arg(short = 't', long, value_enum)]
    pub output_type: Option<OutputType>,

    /// Remove unused translations from your locale files
    #[arg(short, long)]
    pub purge: bool,

    /// CSS selector of the elements holding keys in HTML [default: [data-localize]]
    #[arg(long, value_name = "QUERY")]
    pub html_query: Option<String>,

    /// Name of the localization function in JS [default: localize]
    #[arg(long, value_name = "NAME")]
    pub js_function: Option<String>,

    /// Config file to use instead of searching for .localizerc.json
    #[arg(short, long, env = "EXTRACT_LOCALES_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip files that fail to parse instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if !self.locales.is_empty() {
            config.locales = self.locales.clone();
        }
        if !self.html.is_empty() {
            config.html = self.html.clone();
        }
        if !self.js.is_empty() {
            config.js = self.js.clone();
        }
        if let Some(output) = &self.output {
            config.output_directory = output.clone();
        }
        if let Some(output_type) = self.output_type {
            config.output_type = output_type;
        }
        if let Some(query) = &self.html_query {
            config.html_query = query.clone();
        }
        if let Some(function) = &self.js_function {
            config.js_function = function.clone();
        }
        config.purge |= self.purge;
        config
    }
}
