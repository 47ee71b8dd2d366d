use std::fmt::Write;

use crate::checker::Diagnostic;
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi, should_use_colors};

/// Block output: a `#` header with the finding, the declaration, a blank line.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: should_use_colors(mode),
        }
    }

    fn header(&self, diagnostic: &Diagnostic) -> String {
        let header = format!("# {}", diagnostic.message());
        if self.use_colors {
            format!("{}{header}{}", ansi::YELLOW, ansi::RESET)
        } else {
            header
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        let mut output = String::new();
        for diagnostic in diagnostics {
            writeln!(output, "{}", self.header(diagnostic)).ok();
            if self.use_colors {
                writeln!(
                    output,
                    "{}{}:{} {}",
                    ansi::DIM,
                    diagnostic.callable.location,
                    ansi::RESET,
                    diagnostic.callable
                )
                .ok();
            } else {
                writeln!(
                    output,
                    "{}: {}",
                    diagnostic.callable.location, diagnostic.callable
                )
                .ok();
            }
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
