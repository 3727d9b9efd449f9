//! Per-locale merge of detected keys into locale documents.

use std::{fs, path::PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::{DetectedKeys, KeyRegistry, LocaleDocument, MergeError, Options};

/// Result of a successful locale merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub locale: String,
    pub path: PathBuf,
    /// Number of detected keys that were new to the document.
    pub added: usize,
    /// Keys removed because they are no longer detected (purge only).
    pub purged: Vec<String>,
    /// Number of entries in the written document.
    pub total: usize,
}

/// Per-locale results of a merge run, in configured locale order.
#[derive(Debug, Default)]
pub struct MergeReport {
    pub results: Vec<(String, Result<MergeOutcome, MergeError>)>,
}

impl MergeReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &MergeOutcome> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &MergeError)> {
        self.results
            .iter()
            .filter_map(|(locale, r)| r.as_ref().err().map(|e| (locale.as_str(), e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Writes one locale document per configured locale from a frozen key set.
///
/// Built from a [`Session`](crate::core::Session) once extraction is over;
/// holds only immutable data so locales can be merged in parallel.
#[derive(Debug)]
pub struct LocaleMerger {
    options: Options,
    detected: DetectedKeys,
}

impl LocaleMerger {
    pub fn new(options: Options, registry: &KeyRegistry) -> Self {
        Self {
            options,
            detected: registry.detected_keys(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn detected_keys(&self) -> &DetectedKeys {
        &self.detected
    }

    /// Merge the detected keys into `locale`'s document and write it back.
    ///
    /// Existing values are kept, new keys get their identity default and,
    /// when purging, keys that are no longer detected are dropped.
    pub fn merge_and_write(&self, locale: &str) -> Result<MergeOutcome, MergeError> {
        let dir = self.options.output_directory();
        fs::create_dir_all(dir).map_err(|e| MergeError::io(dir, e))?;

        let format = self.options.output_type().format();
        let path = self.options.locale_path(locale);
        let mut document = LocaleDocument::load(&path, format)?;

        let purged = if self.options.purge() {
            let purged = document.purge(&self.detected);
            for key in &purged {
                info!(locale, key = %key, "old key purged");
            }
            purged
        } else {
            Vec::new()
        };

        let added = self
            .detected
            .keys()
            .filter(|key| !document.contains_key(key))
            .count();

        let merged = document.merged_over(&self.detected);
        merged.save(&path, format)?;
        debug!(locale, path = %path.display(), added, total = merged.len(), "locale written");

        Ok(MergeOutcome {
            locale: locale.to_string(),
            path,
            added,
            purged,
            total: merged.len(),
        })
    }

    /// Merge every configured locale in parallel.
    ///
    /// A failing locale never prevents the others from being written.
    pub fn write_all(&self) -> MergeReport {
        let results = self
            .options
            .locales()
            .par_iter()
            .map(|locale| {
                let result = self.merge_and_write(locale);
                if let Err(e) = &result {
                    debug!(locale = %locale, error = %e, "locale not written");
                }
                (locale.clone(), result)
            })
            .collect();

        MergeReport { results }
    }
}
