use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Keys detected in source, mapped to their identity default translation.
///
/// Iteration order is the sorted key order of the registry snapshot.
pub type DetectedKeys = IndexMap<String, String>;

/// Session-wide set of translation keys.
///
/// Keys only ever accumulate. Stale keys are purged from locale documents at
/// merge time, never from the registry itself.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys: BTreeSet<String>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add keys to the registry. Returns how many were not already present.
    pub fn add<I, S>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keys.into_iter()
            .map(Into::into)
            .fold(0, |added, key| added + usize::from(self.keys.insert(key)))
    }

    /// All keys in lexicographic order.
    pub fn snapshot(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Build the key → key map used as the base of every locale document.
    pub fn detected_keys(&self) -> DetectedKeys {
        self.keys.iter().map(|k| (k.clone(), k.clone())).collect()
    }
}
