//! BCP-47 locale tag validation.
//!
//! The language, script, region and variant subtags are checked by
//! `unic-langid`; extension (`-u-ca-buddhist`) and private-use (`-x-foo`)
//! sequences are checked here against the BCP-47 grammar.

use std::collections::HashSet;

use unic_langid::LanguageIdentifier;

/// Check whether `tag` is a well-formed BCP-47 language tag.
///
/// Matching is case-insensitive. Subtags must be separated by `-`.
pub fn validate(tag: &str) -> bool {
    let subtags: Vec<&str> = tag.split('-').collect();
    if subtags
        .iter()
        .any(|s| s.is_empty() || s.len() > 8 || !s.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return false;
    }

    // Everything before the first singleton is the language identifier.
    let split = subtags
        .iter()
        .position(|s| s.len() == 1)
        .unwrap_or(subtags.len());
    if split == 0 {
        return is_private_use(&subtags);
    }

    let (langid, tail) = subtags.split_at(split);
    langid.join("-").parse::<LanguageIdentifier>().is_ok() && validate_extensions(tail)
}

fn is_private_use(subtags: &[&str]) -> bool {
    subtags.len() > 1 && subtags[0].eq_ignore_ascii_case("x")
}

/// Validate a run of `singleton 1*(2-8 alnum)` extensions, optionally ending
/// with a private-use sequence.
fn validate_extensions(subtags: &[&str]) -> bool {
    let mut seen = HashSet::new();
    let mut i = 0;

    while i < subtags.len() {
        let singleton = subtags[i].to_ascii_lowercase();
        if singleton.len() != 1 {
            return false;
        }
        if singleton == "x" {
            return is_private_use(&subtags[i..]);
        }
        if !seen.insert(singleton) {
            return false;
        }

        let start = i + 1;
        let mut end = start;
        while end < subtags.len() && subtags[end].len() >= 2 {
            end += 1;
        }
        if end == start {
            return false;
        }
        i = end;
    }

    true
}
