use std::collections::BTreeSet;

use html5ever::{
    QualName,
    driver::{self, ParseOpts},
    local_name, namespace_url, ns,
    tendril::TendrilSink,
    tree_builder::TreeBuilderOpts,
};
use scraper::{Html, Selector};

use crate::core::{ConfigError, ParseError};

/// Extracts the inner markup of every element matching a CSS selector.
#[derive(Debug)]
pub struct HtmlExtractor {
    selector: Selector,
}

impl HtmlExtractor {
    /// Compile `query` into a selector.
    pub fn new(query: &str) -> Result<Self, ConfigError> {
        let selector = Selector::parse(query).map_err(|e| ConfigError::InvalidHtmlQuery {
            query: query.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { selector })
    }

    /// Parse `content` and return the sorted, deduplicated inner markup of
    /// all matching elements.
    ///
    /// Content starting with a doctype or an `<html>` tag is parsed as a full
    /// document, anything else as a fragment in a `<template>` context. Any
    /// diagnostic raised by the HTML parser fails the extraction.
    pub fn extract(&self, content: &str) -> Result<Vec<String>, ParseError> {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let html = if is_document(content) {
            parse_document(content)
        } else {
            parse_fragment(content)
        };

        if let Some(error) = html.errors.first() {
            return Err(ParseError::html(error.to_string()));
        }

        let keys: BTreeSet<String> = html
            .select(&self.selector)
            .map(|element| element.inner_html())
            .collect();

        Ok(keys.into_iter().collect())
    }
}

/// A missing doctype is not reported.
fn parse_document(content: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            iframe_srcdoc: true,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(Html::new_document(), opts).one(content)
}

/// The `<template>` context accepts table parts and other elements that
/// are only valid inside a specific parent.
fn parse_fragment(content: &str) -> Html {
    driver::parse_fragment(
        Html::new_fragment(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("template")),
        Vec::new(),
    )
    .one(content)
}

fn is_document(content: &str) -> bool {
    let content = content.trim_start();
    starts_with_tag(content, "<!doctype") || starts_with_tag(content, "<html")
}

fn starts_with_tag(content: &str, tag: &str) -> bool {
    content
        .get(..tag.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(tag))
        && !content[tag.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
}
