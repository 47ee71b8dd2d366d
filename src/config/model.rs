use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CopyGuardError, Result};
use crate::layout::SizingConfig;
use crate::scope::{DEFAULT_FIXTURES_DIR, PackageMatcher};

/// Default threshold in bytes: anything wider than two words is flagged.
pub const DEFAULT_MAX_BYTES: u64 = 16;

/// Root of `.copy-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sizing: SizingSection,

    #[serde(default)]
    pub scope: ScopeSection,
}

/// Layout parameters and the wide-type threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SizingSection {
    /// Types strictly larger than this many bytes are wide.
    #[serde(default = "default_max")]
    pub max: u64,

    #[serde(default = "default_word_size")]
    pub word_size: u64,

    #[serde(default = "default_max_align")]
    pub max_align: u64,
}

impl Default for SizingSection {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_BYTES,
            word_size: default_word_size(),
            max_align: default_max_align(),
        }
    }
}

impl SizingSection {
    #[must_use]
    pub const fn sizing_config(&self) -> SizingConfig {
        SizingConfig::new(self.word_size, self.max_align)
    }
}

/// Where units are searched for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScopeSection {
    /// Search roots for non-direct scopes. Empty means `COPY_GUARD_PATH` or `.`.
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Directory name skipped during traversal, like `.` and `_` prefixed ones.
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: String,

    /// Globs over root-relative directory paths; matching subtrees are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScopeSection {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            fixtures_dir: default_fixtures_dir(),
            exclude: Vec::new(),
        }
    }
}

impl ScopeSection {
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn matcher(&self) -> Result<PackageMatcher> {
        PackageMatcher::new(self.fixtures_dir.clone(), &self.exclude)
    }
}

impl Config {
    /// # Errors
    /// Returns [`CopyGuardError::Config`] or [`CopyGuardError::InvalidPattern`]
    /// naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        self.sizing.sizing_config().validate()?;

        let fixtures = &self.scope.fixtures_dir;
        if fixtures.is_empty() {
            return Err(CopyGuardError::Config(
                "scope.fixtures_dir must not be empty".to_string(),
            ));
        }
        if fixtures.contains(['/', '\\']) {
            return Err(CopyGuardError::Config(format!(
                "scope.fixtures_dir must be a single directory name, got {fixtures:?}"
            )));
        }
        self.scope.matcher()?;
        Ok(())
    }
}

const fn default_max() -> u64 {
    DEFAULT_MAX_BYTES
}

const fn default_word_size() -> u64 {
    SizingConfig::DEFAULT_WORD_SIZE
}

const fn default_max_align() -> u64 {
    SizingConfig::DEFAULT_MAX_ALIGN
}

fn default_fixtures_dir() -> String {
    DEFAULT_FIXTURES_DIR.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
