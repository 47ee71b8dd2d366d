use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::Analyzer;
use crate::cli::AnalysisArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader, search_roots};
use crate::resolver::TypeResolver;
use crate::scope::ScopePattern;

/// Load configuration from the filesystem, or defaults with `--no-config`.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// CLI flags win over the configuration file.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &AnalysisArgs) {
    if let Some(max) = args.max {
        config.sizing.max = max;
    }
    if let Some(word_size) = args.word_size {
        config.sizing.word_size = word_size;
    }
    if let Some(max_align) = args.max_align {
        config.sizing.max_align = max_align;
    }
}

/// Effective settings of one `check` or `layout` run.
#[derive(Debug)]
pub(crate) struct AnalysisContext {
    pub config: Config,
    pub roots: Vec<PathBuf>,
    pub scope: ScopePattern,
}

impl AnalysisContext {
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or the
    /// overridden settings are invalid.
    pub(crate) fn prepare(
        args: &AnalysisArgs,
        no_config: bool,
        env_roots: Option<&OsStr>,
    ) -> crate::Result<Self> {
        let mut config = load_config(args.config.as_deref(), no_config)?;
        apply_cli_overrides(&mut config, args);
        config.validate()?;

        let roots = search_roots(&args.root, env_roots, &config.scope);
        tracing::debug!(
            scope = %args.scope,
            roots = ?roots,
            max = config.sizing.max,
            word_size = config.sizing.word_size,
            "prepared analysis"
        );
        Ok(Self {
            config,
            roots,
            scope: ScopePattern::new(args.scope.clone()),
        })
    }

    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub(crate) fn analyzer<'a>(&self, resolver: &'a dyn TypeResolver) -> crate::Result<Analyzer<'a>> {
        Ok(Analyzer::new(
            resolver,
            self.config.scope.matcher()?,
            self.roots.clone(),
            self.config.sizing.sizing_config(),
            self.config.sizing.max,
        ))
    }
}

/// Write output to a file or stdout.
///
/// The `quiet` flag only affects stdout; file writes always proceed.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
