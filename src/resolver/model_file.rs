//! On-disk program model format (`*.model.json`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CopyGuardError, Result};
use crate::model::{
    CallableSignature, CompositeTypeDef, FieldDef, ParamSpec, ReceiverSpec, ResultSpec,
    Scalar, SourceLocation, TypeRef, Width,
};

/// Suffix of model files picked up by [`super::ModelResolver`].
pub const MODEL_FILE_SUFFIX: &str = ".model.json";

/// Conversion failures carry a message; the caller attaches the file path.
pub type Conversion<T> = std::result::Result<T, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    pub unit: String,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub callables: Vec<CallableDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default)]
    pub embedded: bool,
}

/// `{"scalar": "int64"}`, `{"named": "Foo"}`, `{"pointer": ...}`,
/// `{"array": {"len": 4, "elem": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    Scalar(String),
    Named(String),
    Pointer(Box<TypeExpr>),
    Array { len: u64, elem: Box<TypeExpr> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarDecl {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallableDecl {
    pub name: String,
    #[serde(default)]
    pub receiver: Option<VarDecl>,
    #[serde(default)]
    pub params: Vec<VarDecl>,
    #[serde(default)]
    pub results: Vec<VarDecl>,
    pub position: Position,
}

/// Intrinsic width of a built-in scalar name. Reference-like values count
/// as one word.
#[must_use]
pub fn builtin_width(name: &str) -> Option<Width> {
    let width = match name {
        "bool" | "int8" | "uint8" | "byte" => Width::Bytes(1),
        "int16" | "uint16" => Width::Bytes(2),
        "int32" | "uint32" | "rune" | "float32" => Width::Bytes(4),
        "int64" | "uint64" | "float64" | "complex64" => Width::Bytes(8),
        "complex128" => Width::Bytes(16),
        "int" | "uint" | "uintptr" | "string" | "interface" | "any" | "error" | "slice"
        | "map" | "chan" | "func" | "unsafe.Pointer" => Width::Word,
        _ => return None,
    };
    Some(width)
}

impl TypeExpr {
    /// # Errors
    /// Returns a message for an unknown scalar name.
    pub fn to_type_ref(&self) -> Conversion<TypeRef> {
        Ok(match self {
            Self::Scalar(name) => match builtin_width(name) {
                Some(width) => TypeRef::Scalar(Scalar {
                    name: name.clone(),
                    width,
                }),
                None => return Err(format!("unknown scalar type {name:?}")),
            },
            Self::Named(name) => TypeRef::named(name.clone()),
            Self::Pointer(pointee) => TypeRef::pointer(pointee.to_type_ref()?),
            Self::Array { len, elem } => TypeRef::array(elem.to_type_ref()?, *len),
        })
    }
}

impl TypeDecl {
    /// # Errors
    /// Returns an error message naming the offending field.
    pub fn to_definition(&self) -> Conversion<CompositeTypeDef> {
        let fields = self
            .fields
            .iter()
            .map(|field| -> Conversion<FieldDef> {
                let ty = field
                    .ty
                    .to_type_ref()
                    .map_err(|e| format!("field {:?} of {}: {e}", field.name, self.name))?;
                Ok(FieldDef {
                    name: field.name.clone(),
                    ty,
                    embedded: field.embedded,
                })
            })
            .collect::<Conversion<Vec<_>>>()?;
        Ok(CompositeTypeDef::new(self.name.clone(), fields))
    }
}

impl CallableDecl {
    /// # Errors
    /// Returns an error message naming the offending callable.
    pub fn to_signature(&self) -> Conversion<CallableSignature> {
        let convert = |decl: &VarDecl| -> Conversion<TypeRef> {
            decl.ty
                .to_type_ref()
                .map_err(|e| format!("callable {}: {e}", self.name))
        };
        let receiver = match &self.receiver {
            Some(r) => Some(ReceiverSpec {
                name: r.name.clone(),
                ty: convert(r)?,
            }),
            None => None,
        };
        let params = self
            .params
            .iter()
            .map(|p| -> Conversion<ParamSpec> {
                Ok(ParamSpec {
                    name: p.name.clone(),
                    ty: convert(p)?,
                })
            })
            .collect::<Conversion<Vec<_>>>()?;
        let results = self
            .results
            .iter()
            .map(|r| -> Conversion<ResultSpec> { Ok(ResultSpec { ty: convert(r)? }) })
            .collect::<Conversion<Vec<_>>>()?;

        Ok(CallableSignature {
            name: self.name.clone(),
            receiver,
            params,
            results,
            location: SourceLocation::new(
                self.position.file.clone(),
                self.position.line,
                self.position.column,
            ),
        })
    }
}

impl ModelFile {
    /// # Errors
    /// Returns [`CopyGuardError::Resolution`] if `content` is not a valid model.
    pub fn parse(path: PathBuf, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CopyGuardError::Resolution {
            path,
            message: format!("malformed model file: {e}"),
        })
    }
}

#[cfg(test)]
#[path = "model_file_tests.rs"]
mod tests;
