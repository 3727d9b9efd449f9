//! Extraction and merge engine.
//!
//! ## Pipeline
//!
//! ```text
//! HTML / JS text ──► extract ──► KeyRegistry ──► LocaleMerger ──► <dir>/<locale>.<ext>
//! ```
//!
//! - `session`: owns the options and registry for one run
//! - `extract`: HTML and JS key extractors
//! - `registry`: deduplicated, sorted key set
//! - `document`: locale file load / purge / merge / save
//! - `merge`: per-locale merge and parallel fan-out
//! - `locale`: BCP-47 tag validation

pub mod document;
pub mod error;
pub mod extract;
pub mod locale;
pub mod merge;
pub mod options;
pub mod registry;
pub mod session;

pub use document::LocaleDocument;
pub use error::{ConfigError, MergeError, ParseError, SourceKind};
pub use extract::{HtmlExtractor, JsExtractor};
pub use merge::{LocaleMerger, MergeOutcome, MergeReport};
pub use options::{Options, OutputFormat, OutputType};
pub use registry::{DetectedKeys, KeyRegistry};
pub use session::Session;
