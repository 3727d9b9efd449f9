use tracing::debug;

use crate::core::{
    ConfigError, HtmlExtractor, JsExtractor, KeyRegistry, LocaleMerger, MergeReport, Options,
    ParseError,
};

/// One extraction session: validated options plus the keys found so far.
///
/// Extraction calls accumulate keys into the registry. Merging consumes the
/// session through [`Session::into_merger`], so every extraction necessarily
/// happens before any locale file is written.
#[derive(Debug)]
pub struct Session {
    options: Options,
    html: HtmlExtractor,
    js: JsExtractor,
    registry: KeyRegistry,
}

impl Session {
    /// Build the extractors for `options`.
    ///
    /// Fails if the HTML query is not a valid selector or the JS function is
    /// not an identifier.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        let html = HtmlExtractor::new(options.html_query())?;
        let js = JsExtractor::new(options.js_function())?;
        Ok(Self {
            options,
            html,
            js,
            registry: KeyRegistry::new(),
        })
    }

    /// Extract keys from an HTML fragment and record them in the registry.
    pub fn extract_from_html(&mut self, content: &str) -> Result<Vec<String>, ParseError> {
        let keys = self.html.extract(content)?;
        let added = self.registry.add(&keys);
        debug!(found = keys.len(), added, "html keys extracted");
        Ok(keys)
    }

    /// Extract keys from JS source and record them in the registry.
    pub fn extract_from_js(&mut self, content: &str) -> Result<Vec<String>, ParseError> {
        let keys = self.js.extract(content)?;
        let added = self.registry.add(&keys);
        debug!(found = keys.len(), added, "js keys extracted");
        Ok(keys)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// End extraction and freeze the registry for merging.
    pub fn into_merger(self) -> LocaleMerger {
        LocaleMerger::new(self.options, &self.registry)
    }

    /// End extraction and write every locale file.
    pub fn output(self) -> MergeReport {
        self.into_merger().write_all()
    }
}
