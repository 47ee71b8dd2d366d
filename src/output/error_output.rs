//! Error output on stderr, kept apart from the report on stdout.
//!
//! Format: `✖ Error Type: message` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::CopyGuardError;

use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // Respect NO_COLOR environment variable (https://no-color.org/)
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints `err` with its category and help line.
    pub fn print(&self, err: &CopyGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            err.error_type(),
            &err.message(),
            err.suggestion(),
        );
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        suggestion: Option<&str>,
    ) {
        // A closed stderr leaves nowhere else to report the failure.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Convenience function: prints an error using auto-detected color mode.
pub fn print_error(err: &CopyGuardError) {
    ErrorOutput::stderr().print(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
