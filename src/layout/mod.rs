//! Flat-sum layout calculation for composite types.
//!
//! A composite's size is the plain sum of its field sizes in declaration
//! order. No padding is inserted between fields, so the result is a lower
//! bound of the real footprint; `max_align` only feeds [`LayoutCalculator::align_of`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CopyGuardError, Result};
use crate::model::{CompositeTypeDef, TypeKey, TypeRef, TypeTable, Width};

/// Target description used for every size computation of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Bytes per machine word.
    pub word_size: u64,
    /// Largest alignment any field may impose.
    pub max_align: u64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORD_SIZE, Self::DEFAULT_MAX_ALIGN)
    }
}

impl SizingConfig {
    pub const DEFAULT_WORD_SIZE: u64 = 8;
    pub const DEFAULT_MAX_ALIGN: u64 = 8;

    #[must_use]
    pub const fn new(word_size: u64, max_align: u64) -> Self {
        Self {
            word_size,
            max_align,
        }
    }

    /// # Errors
    /// Returns a configuration error for a zero word size or a
    /// `max_align` that is not a power of two.
    pub fn validate(&self) -> Result<()> {
        if self.word_size == 0 {
            return Err(CopyGuardError::Config(
                "word_size must be greater than 0".to_string(),
            ));
        }
        if !self.max_align.is_power_of_two() {
            return Err(CopyGuardError::Config(format!(
                "max_align must be a power of two, got {}",
                self.max_align
            )));
        }
        Ok(())
    }
}

/// Computes sizes against one unit's type table, memoizing by type key.
pub struct LayoutCalculator<'a> {
    types: &'a TypeTable,
    config: SizingConfig,
    sizes: HashMap<TypeKey, u64>,
    in_progress: HashSet<TypeKey>,
}

impl<'a> LayoutCalculator<'a> {
    #[must_use]
    pub fn new(types: &'a TypeTable, config: SizingConfig) -> Self {
        Self {
            types,
            config,
            sizes: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Size in bytes of a value of type `ty`.
    ///
    /// # Errors
    /// Returns [`CopyGuardError::Invariant`] when `ty` refers to an undefined
    /// composite, when composites contain each other by value, or when the
    /// size does not fit in a `u64`.
    pub fn size_of(&mut self, ty: &TypeRef) -> Result<u64> {
        match ty {
            TypeRef::Scalar(scalar) => Ok(self.width_bytes(scalar.width)),
            TypeRef::Indirection(_) => Ok(self.config.word_size),
            TypeRef::Array { elem, len } => {
                let elem_size = self.size_of(elem)?;
                elem_size.checked_mul(*len).ok_or_else(|| {
                    CopyGuardError::Invariant(format!("size of {ty} overflows"))
                })
            }
            TypeRef::Composite(key) => self.composite_size(key),
        }
    }

    /// Size of the composite named `key`.
    ///
    /// # Errors
    /// See [`Self::size_of`].
    pub fn composite_size(&mut self, key: &TypeKey) -> Result<u64> {
        if let Some(&size) = self.sizes.get(key) {
            return Ok(size);
        }
        let types = self.types;
        let def = types.get(key).ok_or_else(|| {
            CopyGuardError::Invariant(format!("composite type {key} is not defined"))
        })?;
        if !self.in_progress.insert(key.clone()) {
            return Err(CopyGuardError::Invariant(format!(
                "composite type {key} contains itself by value"
            )));
        }

        let summed = self.sum_fields(key, def);
        self.in_progress.remove(key);
        let total = summed?;

        self.sizes.insert(key.clone(), total);
        tracing::trace!(%key, size = total, "computed composite size");
        Ok(total)
    }

    fn sum_fields(&mut self, key: &TypeKey, def: &CompositeTypeDef) -> Result<u64> {
        let mut total: u64 = 0;
        for field in &def.fields {
            let field_size = self.size_of(&field.ty)?;
            total = total.checked_add(field_size).ok_or_else(|| {
                CopyGuardError::Invariant(format!("size of {key} overflows"))
            })?;
        }
        Ok(total)
    }

    /// Natural alignment of `ty`, clamped to `max_align`.
    ///
    /// # Errors
    /// See [`Self::size_of`].
    pub fn align_of(&mut self, ty: &TypeRef) -> Result<u64> {
        match ty {
            TypeRef::Scalar(scalar) => Ok(self.clamp_align(self.width_bytes(scalar.width))),
            TypeRef::Indirection(_) => Ok(self.clamp_align(self.config.word_size)),
            TypeRef::Array { elem, .. } => self.align_of(elem),
            TypeRef::Composite(key) => self.composite_align(key),
        }
    }

    /// Largest field alignment of the composite, 1 when it has no fields.
    ///
    /// # Errors
    /// See [`Self::size_of`].
    pub fn composite_align(&mut self, key: &TypeKey) -> Result<u64> {
        // Sizing first rejects undefined keys and value cycles.
        self.composite_size(key)?;
        let types = self.types;
        let Some(def) = types.get(key) else {
            return Err(CopyGuardError::Invariant(format!(
                "composite type {key} is not defined"
            )));
        };
        let mut align = 1;
        for field in &def.fields {
            align = align.max(self.align_of(&field.ty)?);
        }
        Ok(align)
    }

    const fn width_bytes(&self, width: Width) -> u64 {
        match width {
            Width::Bytes(bytes) => bytes,
            Width::Word => self.config.word_size,
        }
    }

    fn clamp_align(&self, size: u64) -> u64 {
        size.clamp(1, self.config.max_align.max(1))
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
