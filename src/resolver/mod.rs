//! Supplies the typed program model of one directory.

mod model_file;

pub use model_file::{
    CallableDecl, FieldDecl, MODEL_FILE_SUFFIX, ModelFile, Position, TypeDecl, TypeExpr, VarDecl,
    builtin_width,
};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{CopyGuardError, Result};
use crate::model::{CompilationUnit, TypeRef, TypeTable};

/// Source of resolved compilation units.
pub trait TypeResolver: Sync {
    /// Resolves the unit declared in `dir`.
    ///
    /// Returns `Ok(None)` when the directory holds nothing to analyze.
    ///
    /// # Errors
    /// Returns [`CopyGuardError::AmbiguousUnit`] when the directory declares
    /// more than one unit, or [`CopyGuardError::Resolution`] when it cannot
    /// be processed.
    fn resolve(&self, dir: &Path) -> Result<Option<CompilationUnit>>;
}

/// Reads `*.model.json` files placed directly in a directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelResolver;

impl ModelResolver {
    fn model_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| CopyGuardError::Resolution {
            path: dir.to_path_buf(),
            message: format!("unable to read directory: {e}"),
        })?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(MODEL_FILE_SUFFIX))
            })
            .collect();
        files.sort();
        Ok(files)
    }

    fn read_model(path: &Path) -> Result<ModelFile> {
        let content = std::fs::read_to_string(path).map_err(|e| CopyGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        ModelFile::parse(path.to_path_buf(), &content)
    }

    /// Merges parsed files into one unit.
    ///
    /// # Errors
    /// See [`TypeResolver::resolve`].
    pub fn build_unit(
        dir: &Path,
        files: &[(PathBuf, ModelFile)],
    ) -> Result<Option<CompilationUnit>> {
        let names: BTreeSet<&str> = files.iter().map(|(_, file)| file.unit.as_str()).collect();
        let unit_name = match names.len() {
            0 => return Ok(None),
            1 => names.iter().next().map(ToString::to_string).unwrap_or_default(),
            _ => {
                return Err(CopyGuardError::AmbiguousUnit {
                    dir: dir.to_path_buf(),
                    units: names.into_iter().map(str::to_string).collect(),
                });
            }
        };

        let mut unit = CompilationUnit::new(unit_name, dir);
        for (path, file) in files {
            let resolution = |message: String| CopyGuardError::Resolution {
                path: path.clone(),
                message,
            };
            for decl in &file.types {
                let def = decl.to_definition().map_err(resolution)?;
                if unit.types.contains_key(&def.key) {
                    return Err(resolution(format!("type {} is defined more than once", def.key)));
                }
                unit.types.insert(def.key.clone(), def);
            }
            for decl in &file.callables {
                unit.callables.push(decl.to_signature().map_err(resolution)?);
            }
        }

        check_value_references(&unit.types).map_err(|message| CopyGuardError::Resolution {
            path: dir.to_path_buf(),
            message,
        })?;
        Ok(Some(unit))
    }
}

impl TypeResolver for ModelResolver {
    fn resolve(&self, dir: &Path) -> Result<Option<CompilationUnit>> {
        let paths = Self::model_files(dir)?;
        if paths.is_empty() {
            tracing::debug!(dir = %dir.display(), "no model files, skipping");
            return Ok(None);
        }
        let files = paths
            .into_iter()
            .map(|path| Self::read_model(&path).map(|file| (path, file)))
            .collect::<Result<Vec<_>>>()?;
        let unit = Self::build_unit(dir, &files)?;
        if let Some(unit) = &unit {
            tracing::debug!(
                dir = %dir.display(),
                unit = %unit.name,
                types = unit.types.len(),
                callables = unit.callables.len(),
                "resolved unit"
            );
        }
        Ok(unit)
    }
}

/// Every composite used by value in a field must be defined in the unit.
/// Types behind an indirection are never sized and may be foreign.
fn check_value_references(types: &TypeTable) -> std::result::Result<(), String> {
    fn visit(ty: &TypeRef, types: &TypeTable) -> Option<String> {
        match ty {
            TypeRef::Scalar(_) | TypeRef::Indirection(_) => None,
            TypeRef::Array { elem, .. } => visit(elem, types),
            TypeRef::Composite(key) => (!types.contains_key(key)).then(|| key.to_string()),
        }
    }

    for def in types.values() {
        for field in &def.fields {
            if let Some(missing) = visit(&field.ty, types) {
                return Err(format!(
                    "field {:?} of {} uses undefined type {missing} by value",
                    field.name, def.key
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
