//! Locale documents: flat key → value maps stored as JSON or YAML.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::core::{DetectedKeys, MergeError, OutputFormat};

/// A single locale file's contents, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDocument {
    entries: IndexMap<String, String>,
}

impl LocaleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the document at `path`, or an empty one if the file does not exist.
    pub fn load(path: &Path, format: OutputFormat) -> Result<Self, MergeError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(MergeError::io(path, e)),
        };

        Self::parse(&content, format).map_err(|e| MergeError::CannotParse {
            path: path.to_path_buf(),
            format,
            reason: format!("{:#}", e),
        })
    }

    /// Parse a document. Blank content is an empty document; otherwise the
    /// root must be a mapping whose values are all strings.
    pub fn parse(content: &str, format: OutputFormat) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let root: Value = match format {
            OutputFormat::Json => serde_json::from_str(content).context("invalid JSON")?,
            OutputFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML")?,
        };

        let Value::Object(map) = root else {
            bail!("root of a locale file must be a mapping");
        };

        let mut entries = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            let Value::String(value) = value else {
                bail!("value for key `{}` must be a string", key);
            };
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Serialize the document. JSON is indented by two spaces; both formats
    /// end with a newline.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let content = serde_json::to_string_pretty(&self.entries)
                    .context("Failed to serialize JSON")?;
                Ok(format!("{}\n", content))
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(&self.entries).context("Failed to serialize YAML")
            }
        }
    }

    /// Write the document to `path`, replacing any existing file in one step.
    ///
    /// The content goes to a temporary file next to `path` which is then
    /// renamed over it, so readers never observe a partially written file.
    pub fn save(&self, path: &Path, format: OutputFormat) -> Result<(), MergeError> {
        let content = self.render(format).map_err(|e| MergeError::Serialize {
            path: path.to_path_buf(),
            reason: format!("{:#}", e),
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| MergeError::io(dir, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| MergeError::io(path, e))?;
        set_permissions(&file, path).map_err(|e| MergeError::io(path, e))?;
        file.persist(path)
            .map_err(|e| MergeError::io(path, e.error))?;

        Ok(())
    }

    /// Remove every key not present in `detected`. Returns the removed keys
    /// in document order.
    pub fn purge(&mut self, detected: &DetectedKeys) -> Vec<String> {
        let mut purged = Vec::new();
        self.entries.retain(|key, _| {
            let keep = detected.contains_key(key);
            if !keep {
                purged.push(key.clone());
            }
            keep
        });
        purged
    }

    /// Overlay this document on top of `detected`.
    ///
    /// Detected keys come first in their sorted order with existing values
    /// winning over the identity default; keys only present in this document
    /// follow in document order.
    pub fn merged_over(self, detected: &DetectedKeys) -> Self {
        let mut entries = detected.clone();
        entries.extend(self.entries);
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Give the temporary file the permissions of the file it replaces, or the
/// usual `0644` for a new file (temporary files are created `0600`).
fn set_permissions(file: &NamedTempFile, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => file.as_file().set_permissions(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => default_permissions(file),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions(file: &NamedTempFile) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_file: &NamedTempFile) -> io::Result<()> {
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for LocaleDocument
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
