use std::ffi::OsStr;
use std::path::PathBuf;

use super::ScopeSection;

/// Environment variable holding a platform path list of search roots.
pub const SEARCH_PATH_ENV: &str = "COPY_GUARD_PATH";

/// Picks the search roots for pattern scopes.
///
/// Precedence: explicit `--root` flags, then `env_value` (the contents of
/// [`SEARCH_PATH_ENV`]), then `scope.roots`, then the current directory.
/// Empty entries in the path list are ignored.
#[must_use]
pub fn search_roots(
    cli_roots: &[PathBuf],
    env_value: Option<&OsStr>,
    scope: &ScopeSection,
) -> Vec<PathBuf> {
    if !cli_roots.is_empty() {
        return cli_roots.to_vec();
    }
    if let Some(value) = env_value {
        let from_env: Vec<PathBuf> = std::env::split_paths(value)
            .filter(|path| !path.as_os_str().is_empty())
            .collect();
        if !from_env.is_empty() {
            return from_env;
        }
    }
    if !scope.roots.is_empty() {
        return scope.roots.clone();
    }
    vec![PathBuf::from(".")]
}

#[cfg(test)]
#[path = "roots_tests.rs"]
mod tests;
