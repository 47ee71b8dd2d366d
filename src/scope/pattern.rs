use regex::Regex;

use crate::error::{CopyGuardError, Result};

/// Recursive-descent wildcard.
const WILDCARD: &str = "...";

/// Compiles a scope pattern into an anchored regex over slash-separated
/// relative directory paths.
///
/// `...` matches any string, including separators. A trailing `/...` also
/// matches the prefix itself, so `foo/...` matches `foo` and `foo/bar`.
///
/// # Errors
/// Returns a configuration error if the compiled expression is rejected.
pub fn pattern_to_regex(pattern: &str) -> Result<Regex> {
    let mut re = regex::escape(pattern).replace(&regex::escape(WILDCARD), ".*");
    if let Some(prefix) = re.strip_suffix("/.*") {
        re = format!("{prefix}(/.*)?");
    }
    Regex::new(&format!("^{re}$")).map_err(|e| {
        CopyGuardError::Config(format!("invalid scope pattern {pattern:?}: {e}"))
    })
}

/// Normalizes separators and strips redundant slashes.
#[must_use]
pub fn clean_pattern(pattern: &str) -> String {
    pattern
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
