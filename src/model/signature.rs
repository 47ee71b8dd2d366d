use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::TypeRef;

/// Where a callable is declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// Lexical file name first, then line, then column.
impl Ord for SourceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file
            .as_os_str()
            .cmp(other.file.as_os_str())
            .then(self.line.cmp(&other.line))
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.to_string_lossy().replace('\\', "/");
        write!(f, "{file}:{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverSpec {
    pub name: Option<String>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: Option<String>,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSpec {
    pub ty: TypeRef,
}

/// A function, or a method when `receiver` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableSignature {
    pub name: String,
    pub receiver: Option<ReceiverSpec>,
    pub params: Vec<ParamSpec>,
    pub results: Vec<ResultSpec>,
    pub location: SourceLocation,
}

impl CallableSignature {
    #[must_use]
    pub fn function(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            location,
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, ty: TypeRef) -> Self {
        self.receiver = Some(ReceiverSpec { name: None, ty });
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: Option<&str>, ty: TypeRef) -> Self {
        self.params.push(ParamSpec {
            name: name.map(str::to_string),
            ty,
        });
        self
    }

    #[must_use]
    pub fn with_result(mut self, ty: TypeRef) -> Self {
        self.results.push(ResultSpec { ty });
        self
    }
}

/// Renders the declaration, e.g. `func (Foo).OnOther(o other) (Foo, int)`.
impl fmt::Display for CallableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("func ")?;
        if let Some(receiver) = &self.receiver {
            write!(f, "({}).", receiver.ty)?;
        }
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match &param.name {
                Some(name) if !name.is_empty() => write!(f, "{name} {}", param.ty)?,
                _ => write!(f, "{}", param.ty)?,
            }
        }
        f.write_str(")")?;
        match self.results.as_slice() {
            [] => Ok(()),
            [single] => write!(f, " {}", single.ty),
            many => {
                f.write_str(" (")?;
                for (i, result) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", result.ty)?;
                }
                f.write_str(")")
            }
        }
    }
}
