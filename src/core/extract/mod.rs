//! Key extraction from source text.
//!
//! Both extractors are pure: they turn one input into a sorted, deduplicated
//! list of keys and leave registry bookkeeping to the
//! [`Session`](crate::core::Session).
//!
//! - `html`: inner markup of elements matching a CSS selector (scraper)
//! - `js`: string-literal first arguments of localization calls (swc)

pub mod html;
pub mod js;

pub use html::HtmlExtractor;
pub use js::JsExtractor;
