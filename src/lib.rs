//! extract-locales - keep translation files in sync with your sources
//!
//! Collects localization keys from HTML elements matching a CSS selector and
//! from calls to a localization function in JavaScript, then merges them into
//! one JSON or YAML file per supported locale. Existing translations are kept;
//! keys no longer used can optionally be purged.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, input discovery, reporting)
//! - `config`: `.localizerc.json` loading and parsing
//! - `core`: Extraction session, key registry and locale file merging
//!
//! ## Library usage
//!
//! ```no_run
//! use extract_locales::core::{Options, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = Options::new(["en-US", "fr-FR"])?.with_purge(true);
//! let mut session = Session::new(options)?;
//! session.extract_from_html(r#"<p data-localize>Hello</p>"#)?;
//! session.extract_from_js(r#"localize("Bye")"#)?;
//!
//! let report = session.output();
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
