//! Resolved program model handed to the checker by a [`TypeResolver`].
//!
//! Everything here is immutable once produced: composite type definitions,
//! their fields, and the callable signatures declared in one compilation unit.
//!
//! [`TypeResolver`]: crate::resolver::TypeResolver

mod signature;

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

pub use signature::{CallableSignature, ParamSpec, ReceiverSpec, ResultSpec, SourceLocation};

/// Identity of a composite type, unique within its compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeKey(String);

impl TypeKey {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Intrinsic width of a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Fixed number of bytes regardless of the target.
    Bytes(u64),
    /// One machine word (`int`, `uintptr`, references, interfaces).
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub name: String,
    pub width: Width,
}

/// A reference to a type as it appears in a field, parameter or result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Scalar(Scalar),
    Composite(TypeKey),
    Array { elem: Box<TypeRef>, len: u64 },
    /// Pointer or reference. Always one word; the pointee is never sized.
    Indirection(Box<TypeRef>),
}

impl TypeRef {
    #[must_use]
    pub fn scalar(name: impl Into<String>, bytes: u64) -> Self {
        Self::Scalar(Scalar {
            name: name.into(),
            width: Width::Bytes(bytes),
        })
    }

    #[must_use]
    pub fn word(name: impl Into<String>) -> Self {
        Self::Scalar(Scalar {
            name: name.into(),
            width: Width::Word,
        })
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Composite(TypeKey::new(name))
    }

    #[must_use]
    pub fn pointer(pointee: Self) -> Self {
        Self::Indirection(Box::new(pointee))
    }

    #[must_use]
    pub fn array(elem: Self, len: u64) -> Self {
        Self::Array {
            elem: Box::new(elem),
            len,
        }
    }

    /// The composite key when this is a by-value use of a composite.
    #[must_use]
    pub const fn direct_composite(&self) -> Option<&TypeKey> {
        match self {
            Self::Composite(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(&scalar.name),
            Self::Composite(key) => write!(f, "{key}"),
            Self::Array { elem, len } => write!(f, "[{len}]{elem}"),
            Self::Indirection(pointee) => write!(f, "*{pointee}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Empty for embedded fields.
    pub name: String,
    pub ty: TypeRef,
    pub embedded: bool,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
        }
    }

    #[must_use]
    pub const fn embedded(ty: TypeRef) -> Self {
        Self {
            name: String::new(),
            ty,
            embedded: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTypeDef {
    pub key: TypeKey,
    pub fields: Vec<FieldDef>,
}

impl CompositeTypeDef {
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            key: TypeKey::new(name),
            fields,
        }
    }
}

/// Composite definitions of one unit, in definition order.
pub type TypeTable = IndexMap<TypeKey, CompositeTypeDef>;

/// One directory's worth of resolved declarations.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub name: String,
    pub dir: PathBuf,
    pub types: TypeTable,
    pub callables: Vec<CallableSignature>,
}

impl CompilationUnit {
    #[must_use]
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Adds a type definition, replacing any previous one with the same key.
    #[must_use]
    pub fn with_type(mut self, def: CompositeTypeDef) -> Self {
        self.types.insert(def.key.clone(), def);
        self
    }

    #[must_use]
    pub fn with_callable(mut self, callable: CallableSignature) -> Self {
        self.callables.push(callable);
        self
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
