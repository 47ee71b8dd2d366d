use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyGuardError {
    #[error("unable to find compilation units matching {scope:?}: {reason}")]
    ScopeNotFound { scope: String, reason: String },

    #[error("more than one compilation unit found in {}: {}", dir.display(), units.join(","))]
    AmbiguousUnit { dir: PathBuf, units: Vec<String> },

    #[error("unable to resolve unit at {}: {message}", path.display())]
    Resolution { path: PathBuf, message: String },

    #[error("internal invariant violated: {0}")]
    Invariant(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CopyGuardError {
    /// Short category name shown in front of the message on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ScopeNotFound { .. } => "Scope",
            Self::AmbiguousUnit { .. } => "AmbiguousUnit",
            Self::Resolution { .. } => "Resolution",
            Self::Invariant(_) => "Internal",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The message without the category prefix baked into some variants.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Invariant(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            _ => self.to_string(),
        }
    }

    /// Optional help line for errors a user can act on.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ScopeNotFound { .. } => Some(
                "check the scope spelling, or add a search root with --root or COPY_GUARD_PATH",
            ),
            Self::AmbiguousUnit { .. } => {
                Some("every model file in one directory must declare the same unit name")
            }
            Self::InvalidPattern { .. } => {
                Some("check [scope].exclude in the configuration for glob syntax errors")
            }
            Self::TomlParse(_) => Some("run `copy-guard init` to see a valid configuration"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CopyGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
