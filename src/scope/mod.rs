//! Resolves a scope string into the directories to analyze.
//!
//! A scope is either a direct directory path (absolute, or starting with
//! `.`) or a pattern matched against every directory under each search root.

mod pattern;

pub use pattern::{clean_pattern, pattern_to_regex};

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexSet;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::{CopyGuardError, Result};

/// Directory name pruned from traversal by default.
pub const DEFAULT_FIXTURES_DIR: &str = "testdata";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopePattern(String);

impl ScopePattern {
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self(scope.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute paths and paths starting with `.` name one directory.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.0.starts_with('.') || Path::new(&self.0).is_absolute()
    }
}

impl fmt::Display for ScopePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves scopes against search roots, pruning hidden, underscore,
/// fixture and excluded directory trees.
pub struct PackageMatcher {
    fixtures_dir: String,
    exclude: GlobSet,
}

impl Default for PackageMatcher {
    fn default() -> Self {
        Self {
            fixtures_dir: DEFAULT_FIXTURES_DIR.to_string(),
            exclude: GlobSet::empty(),
        }
    }
}

impl PackageMatcher {
    /// # Errors
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn new(fixtures_dir: impl Into<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CopyGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|e| CopyGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            fixtures_dir: fixtures_dir.into(),
            exclude,
        })
    }

    /// Ordered, de-duplicated directories named by `scope`.
    ///
    /// # Errors
    /// Returns [`CopyGuardError::ScopeNotFound`] when a direct path is
    /// missing or not a directory, or when a pattern matches nothing.
    pub fn resolve(&self, scope: &ScopePattern, roots: &[PathBuf]) -> Result<IndexSet<PathBuf>> {
        if scope.is_direct() {
            return Self::resolve_direct(scope);
        }

        let cleaned = clean_pattern(scope.as_str());
        let re = pattern_to_regex(&cleaned)?;
        let mut seen = HashSet::new();
        let mut dirs = IndexSet::new();
        for root in roots {
            for dir in self.match_root(root, &re) {
                let identity = dunce::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
                if seen.insert(identity) {
                    dirs.insert(dir);
                }
            }
        }

        if dirs.is_empty() {
            return Err(CopyGuardError::ScopeNotFound {
                scope: scope.to_string(),
                reason: format!("no directory matched under {} search root(s)", roots.len()),
            });
        }
        tracing::debug!(scope = %scope, matched = dirs.len(), "resolved scope pattern");
        Ok(dirs)
    }

    fn resolve_direct(scope: &ScopePattern) -> Result<IndexSet<PathBuf>> {
        let path = PathBuf::from(scope.as_str());
        let metadata = std::fs::metadata(&path).map_err(|e| CopyGuardError::ScopeNotFound {
            scope: scope.to_string(),
            reason: format!("unable to stat {}: {e}", path.display()),
        })?;
        if !metadata.is_dir() {
            return Err(CopyGuardError::ScopeNotFound {
                scope: scope.to_string(),
                reason: format!("{} is not a directory", path.display()),
            });
        }
        Ok(IndexSet::from([path]))
    }

    /// Directories under `root` whose relative path matches `re`. The root
    /// itself never matches.
    fn match_root(&self, root: &Path, re: &Regex) -> Vec<PathBuf> {
        tracing::debug!(root = %root.display(), "walking search root");
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || self.should_descend(root, entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.depth() > 0)
            .filter(|entry| re.is_match(&relative_slash_path(root, entry.path())))
            .map(DirEntry::into_path)
            .collect()
    }

    fn should_descend(&self, root: &Path, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        if self.is_pruned_name(&name) {
            tracing::trace!(dir = %entry.path().display(), "pruned directory");
            return false;
        }
        let relative = relative_slash_path(root, entry.path());
        if self.exclude.is_match(&relative) {
            tracing::trace!(dir = %relative, "excluded directory");
            return false;
        }
        true
    }

    /// `.foo`, `_foo` and the fixtures directory are not units of their own.
    #[must_use]
    pub fn is_pruned_name(&self, name: &str) -> bool {
        name.starts_with('.') || name.starts_with('_') || name == self.fixtures_dir
    }
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
