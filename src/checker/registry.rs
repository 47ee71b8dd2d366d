use std::collections::BTreeSet;

use crate::error::Result;
use crate::layout::{LayoutCalculator, SizingConfig};
use crate::model::{TypeKey, TypeRef, TypeTable};

/// Composite types of one unit whose flat size exceeds the threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideTypeRegistry {
    wide: BTreeSet<TypeKey>,
}

impl WideTypeRegistry {
    /// Sizes every composite in `types` and keeps those strictly larger
    /// than `threshold` bytes.
    ///
    /// # Errors
    /// Propagates layout invariant violations.
    pub fn build(types: &TypeTable, config: SizingConfig, threshold: u64) -> Result<Self> {
        let mut calc = LayoutCalculator::new(types, config);
        let mut wide = BTreeSet::new();
        for key in types.keys() {
            if calc.composite_size(key)? > threshold {
                wide.insert(key.clone());
            }
        }
        Ok(Self { wide })
    }

    /// True only for a by-value use of a wide composite.
    #[must_use]
    pub fn contains(&self, ty: &TypeRef) -> bool {
        ty.direct_composite().is_some_and(|key| self.wide.contains(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &TypeKey) -> bool {
        self.wide.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wide.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wide.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
