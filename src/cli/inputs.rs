//! Input discovery: expand file, directory and glob entries into files.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::glob;
use tracing::warn;
use walkdir::WalkDir;

use crate::config::is_glob_pattern;
use crate::core::SourceKind;

/// File extensions picked up when walking a directory.
fn extensions(kind: SourceKind) -> &'static [&'static str] {
    match kind {
        SourceKind::Html => &["html", "htm"],
        SourceKind::Js => &["js", "mjs", "cjs", "jsx"],
    }
}

fn has_extension(path: &Path, kind: SourceKind) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions(kind)
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Resolve input entries into a sorted, deduplicated list of files.
///
/// - A file is taken as-is, whatever its extension.
/// - A directory is walked recursively for files with a known extension.
/// - A glob pattern is expanded; matching nothing only warns.
/// - Anything else is an error.
pub fn collect_files(entries: &[String], kind: SourceKind) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for entry in entries {
        let path = Path::new(entry);

        if path.is_file() {
            files.insert(path.to_path_buf());
        } else if path.is_dir() {
            for dir_entry in WalkDir::new(path).follow_links(true) {
                let dir_entry = dir_entry
                    .with_context(|| format!("Failed to walk directory: {}", path.display()))?;
                if dir_entry.file_type().is_file() && has_extension(dir_entry.path(), kind) {
                    files.insert(dir_entry.into_path());
                }
            }
        } else if is_glob_pattern(entry) {
            let matches = glob(entry)
                .with_context(|| format!("Invalid glob pattern: \"{}\"", entry))?;
            let before = files.len();
            for matched in matches {
                let matched = matched
                    .with_context(|| format!("Failed to read glob match of \"{}\"", entry))?;
                if matched.is_file() {
                    files.insert(matched);
                }
            }
            if files.len() == before {
                warn!(pattern = %entry, "no {} file matches pattern", kind);
            }
        } else {
            bail!("{} input not found: {}", kind, entry);
        }
    }

    Ok(files.into_iter().collect())
}
