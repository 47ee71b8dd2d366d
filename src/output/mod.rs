mod compact;
mod error_output;
mod json;
mod layout;
mod progress;
mod text;

pub use compact::CompactFormatter;
pub use error_output::{ErrorOutput, print_error};
pub use json::JsonFormatter;
pub use layout::{LayoutFormatter, TypeLayoutRow, UnitLayout};
pub use progress::ScanProgress;
pub use text::TextFormatter;

use crate::checker::Diagnostic;
use crate::error::Result;

/// Trait for formatting sorted diagnostics into various output formats.
pub trait OutputFormatter {
    /// Format the diagnostics into a string. Callers pass them already sorted.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, diagnostics: &[Diagnostic]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Compact,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "compact" | "line" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Overall outcome surfaced to the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Clean,
    ViolationsFound,
}

impl ExitSignal {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Clean => crate::EXIT_SUCCESS,
            Self::ViolationsFound => crate::EXIT_VIOLATIONS_FOUND,
        }
    }
}

/// Rendered report plus the signal derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub exit_signal: ExitSignal,
}

/// Stable sort by declaration file, then line, then column.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| a.callable.location.cmp(&b.callable.location));
}

/// Sorts and renders; the only place an [`ExitSignal`] is decided.
///
/// # Errors
/// Returns an error if the formatter fails.
pub fn render(mut diagnostics: Vec<Diagnostic>, formatter: &dyn OutputFormatter) -> Result<Report> {
    sort_diagnostics(&mut diagnostics);
    let text = formatter.format(&diagnostics)?;
    let exit_signal = if diagnostics.is_empty() {
        ExitSignal::Clean
    } else {
        ExitSignal::ViolationsFound
    };
    Ok(Report { text, exit_signal })
}

pub(crate) fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
