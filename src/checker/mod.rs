mod registry;
mod scan;
mod violation;

pub use registry::WideTypeRegistry;
pub use scan::{scan, violations_of};
pub use violation::{Diagnostic, ViolationDescriptor};

use crate::error::Result;
use crate::layout::SizingConfig;
use crate::model::CompilationUnit;

/// Builds the unit's registry and scans its callables.
///
/// # Errors
/// Propagates layout invariant violations.
pub fn check_unit(
    unit: &CompilationUnit,
    config: SizingConfig,
    threshold: u64,
) -> Result<Vec<Diagnostic>> {
    let registry = WideTypeRegistry::build(&unit.types, config, threshold)?;
    let diagnostics = scan(&unit.callables, &registry);
    tracing::debug!(
        unit = %unit.name,
        types = unit.types.len(),
        wide = registry.len(),
        callables = unit.callables.len(),
        diagnostics = diagnostics.len(),
        "checked unit"
    );
    Ok(diagnostics)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
