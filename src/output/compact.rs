use std::fmt::Write;

use crate::checker::Diagnostic;
use crate::error::Result;

use super::OutputFormatter;

/// One line per diagnostic: `file:line:col: message (signature)`.
pub struct CompactFormatter;

impl OutputFormatter for CompactFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        let mut output = String::new();
        for diagnostic in diagnostics {
            writeln!(
                output,
                "{}: {} ({})",
                diagnostic.callable.location,
                diagnostic.message(),
                diagnostic.callable
            )
            .ok();
        }
        Ok(output)
    }
}
