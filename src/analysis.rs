//! The check pipeline: scope → directories → units → diagnostics.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::checker::{Diagnostic, WideTypeRegistry, check_unit};
use crate::error::{CopyGuardError, Result};
use crate::layout::{LayoutCalculator, SizingConfig};
use crate::model::CompilationUnit;
use crate::output::{ScanProgress, TypeLayoutRow, UnitLayout};
use crate::resolver::TypeResolver;
use crate::scope::{PackageMatcher, ScopePattern};

/// Everything one run needs besides the scope.
pub struct Analyzer<'a> {
    resolver: &'a dyn TypeResolver,
    matcher: PackageMatcher,
    roots: Vec<PathBuf>,
    sizing: SizingConfig,
    threshold: u64,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(
        resolver: &'a dyn TypeResolver,
        matcher: PackageMatcher,
        roots: Vec<PathBuf>,
        sizing: SizingConfig,
        threshold: u64,
    ) -> Self {
        Self {
            resolver,
            matcher,
            roots,
            sizing,
            threshold,
        }
    }

    /// Directories named by `scope` under the configured roots.
    ///
    /// # Errors
    /// Returns an error for an invalid sizing or a scope that matches nothing.
    pub fn directories(&self, scope: &ScopePattern) -> Result<Vec<PathBuf>> {
        self.sizing.validate()?;
        let dirs = self.matcher.resolve(scope, &self.roots)?;
        Ok(dirs.into_iter().collect())
    }

    fn no_units(scope: &ScopePattern, searched: usize) -> CopyGuardError {
        CopyGuardError::ScopeNotFound {
            scope: scope.to_string(),
            reason: format!("none of the {searched} matched directories holds a compilation unit"),
        }
    }

    /// Resolves and checks every unit in `scope` in parallel. The first
    /// error aborts the run. Diagnostics come back unsorted.
    ///
    /// # Errors
    /// Returns [`CopyGuardError::ScopeNotFound`] when no unit is found, or
    /// the first resolution or layout error.
    pub fn check(&self, scope: &ScopePattern, progress: &ScanProgress) -> Result<Vec<Diagnostic>> {
        let dirs = self.directories(scope)?;
        self.check_directories(scope, &dirs, progress)
    }

    /// [`Analyzer::check`] over directories already resolved from `scope`.
    ///
    /// # Errors
    /// Same as [`Analyzer::check`].
    pub fn check_directories(
        &self,
        scope: &ScopePattern,
        dirs: &[PathBuf],
        progress: &ScanProgress,
    ) -> Result<Vec<Diagnostic>> {
        let per_unit: Vec<Option<Vec<Diagnostic>>> = dirs
            .par_iter()
            .map(|dir| -> Result<Option<Vec<Diagnostic>>> {
                let outcome = match self.resolver.resolve(dir)? {
                    Some(unit) => Some(check_unit(&unit, self.sizing, self.threshold)?),
                    None => None,
                };
                progress.inc();
                Ok(outcome)
            })
            .collect::<Result<_>>()?;

        let units = per_unit.iter().flatten().count();
        if units == 0 {
            return Err(Self::no_units(scope, dirs.len()));
        }
        let diagnostics: Vec<Diagnostic> = per_unit.into_iter().flatten().flatten().collect();
        tracing::debug!(
            units,
            diagnostics = diagnostics.len(),
            "analysis finished"
        );
        Ok(diagnostics)
    }

    /// Resolved units of `scope`, sorted by directory.
    ///
    /// # Errors
    /// Same as [`Analyzer::check`].
    pub fn units(&self, scope: &ScopePattern) -> Result<Vec<CompilationUnit>> {
        let dirs = self.directories(scope)?;
        let resolved: Vec<Option<CompilationUnit>> = dirs
            .par_iter()
            .map(|dir| self.resolver.resolve(dir))
            .collect::<Result<_>>()?;
        let mut units: Vec<CompilationUnit> = resolved.into_iter().flatten().collect();
        if units.is_empty() {
            return Err(Self::no_units(scope, dirs.len()));
        }
        units.sort_by(|a, b| a.dir.cmp(&b.dir));
        Ok(units)
    }

    /// Size, alignment and wideness of every composite type in `scope`.
    ///
    /// # Errors
    /// Same as [`Analyzer::check`].
    pub fn explain_layouts(&self, scope: &ScopePattern) -> Result<Vec<UnitLayout>> {
        self.units(scope)?
            .iter()
            .map(|unit| explain_unit(unit, self.sizing, self.threshold))
            .collect()
    }
}

/// Layout rows of one unit in definition order.
///
/// # Errors
/// Propagates layout invariant violations.
pub fn explain_unit(
    unit: &CompilationUnit,
    sizing: SizingConfig,
    threshold: u64,
) -> Result<UnitLayout> {
    let registry = WideTypeRegistry::build(&unit.types, sizing, threshold)?;
    let mut calculator = LayoutCalculator::new(&unit.types, sizing);
    let types = unit
        .types
        .keys()
        .map(|key| -> Result<TypeLayoutRow> {
            Ok(TypeLayoutRow {
                name: key.to_string(),
                size: calculator.composite_size(key)?,
                align: calculator.composite_align(key)?,
                wide: registry.contains_key(key),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(UnitLayout {
        name: unit.name.clone(),
        dir: unit.dir.clone(),
        types,
    })
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
