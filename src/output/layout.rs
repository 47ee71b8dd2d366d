use std::fmt::Write;
use std::path::PathBuf;

use serde::Serialize;

use super::{ColorMode, ansi, should_use_colors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeLayoutRow {
    pub name: String,
    pub size: u64,
    pub align: u64,
    pub wide: bool,
}

/// Computed layout of every composite type in one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitLayout {
    pub name: String,
    pub dir: PathBuf,
    pub types: Vec<TypeLayoutRow>,
}

/// Renders `layout` command output.
pub struct LayoutFormatter {
    use_colors: bool,
}

impl LayoutFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: should_use_colors(mode),
        }
    }

    #[must_use]
    pub fn format(&self, units: &[UnitLayout]) -> String {
        let mut output = String::new();
        for (i, unit) in units.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            writeln!(output, "unit {} ({})", unit.name, unit.dir.display()).ok();
            let width = unit.types.iter().map(|t| t.name.len()).max().unwrap_or(0);
            for row in &unit.types {
                write!(
                    output,
                    "  {:<width$}  size={} align={}",
                    row.name, row.size, row.align
                )
                .ok();
                if row.wide {
                    if self.use_colors {
                        write!(output, " {}wide{}", ansi::RED, ansi::RESET).ok();
                    } else {
                        output.push_str(" wide");
                    }
                }
                output.push('\n');
            }
        }
        output
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
