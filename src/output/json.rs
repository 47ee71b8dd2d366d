use serde::Serialize;

use crate::checker::{Diagnostic, ViolationDescriptor};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct Summary {
    diagnostics: usize,
    violations: usize,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    file: String,
    line: u32,
    column: u32,
    callable: &'a str,
    signature: String,
    message: String,
    violations: &'a [ViolationDescriptor],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                diagnostics: diagnostics.len(),
                violations: diagnostics.iter().map(|d| d.violations.len()).sum(),
            },
            diagnostics: diagnostics.iter().map(convert_diagnostic).collect(),
        };

        let mut text = serde_json::to_string_pretty(&output)?;
        text.push('\n');
        Ok(text)
    }
}

fn convert_diagnostic(diagnostic: &Diagnostic) -> JsonDiagnostic<'_> {
    let location = &diagnostic.callable.location;
    JsonDiagnostic {
        file: location.file.to_string_lossy().replace('\\', "/"),
        line: location.line,
        column: location.column,
        callable: &diagnostic.callable.name,
        signature: diagnostic.callable.to_string(),
        message: diagnostic.message(),
        violations: &diagnostic.violations,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
