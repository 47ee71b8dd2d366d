use std::fmt;

use serde::Serialize;

use crate::model::CallableSignature;

/// One by-value use of a wide type in a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationDescriptor {
    Receiver,
    Parameter { index: usize, name: Option<String> },
    Result { index: usize, type_text: String },
}

impl fmt::Display for ViolationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receiver => f.write_str("receiver"),
            Self::Parameter {
                index,
                name: Some(name),
            } if !name.is_empty() => write!(f, "parameter '{name}' at index {index}"),
            Self::Parameter { index, .. } => write!(f, "parameter at index {index}"),
            Self::Result { index, type_text } => {
                write!(f, "return value '{type_text}' at index {index}")
            }
        }
    }
}

/// All violations found in a single callable. Never built with an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub callable: CallableSignature,
    pub violations: Vec<ViolationDescriptor>,
}

impl Diagnostic {
    /// Returns `None` when there is nothing to report.
    #[must_use]
    pub fn new(callable: CallableSignature, violations: Vec<ViolationDescriptor>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self {
                callable,
                violations,
            })
        }
    }

    /// `"a"`, `"a, and b"`, `"a, b, and c"`.
    #[must_use]
    pub fn phrase(&self) -> String {
        let parts: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        match parts.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
        }
    }

    #[must_use]
    pub fn verb(&self) -> &'static str {
        if self.violations.len() > 1 {
            "should be made into pointers"
        } else {
            "should be made into a pointer"
        }
    }

    /// Phrase and verb together, e.g. `receiver should be made into a pointer`.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} {}", self.phrase(), self.verb())
    }
}
