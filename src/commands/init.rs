use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{CopyGuardError, EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CopyGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# copy-guard configuration file

[sizing]
# Types strictly larger than this many bytes are reported when passed by value
max = 16

# Bytes per machine word (int, uint, uintptr, string, pointers, interfaces...)
word_size = 8

# Largest alignment a field may impose; reported by `copy-guard layout`
max_align = 8

[scope]
# Search roots for pattern scopes such as `net/...`
# Empty: COPY_GUARD_PATH if set, else the current directory
roots = []

# Directory name skipped during traversal, like `.` and `_` prefixed ones
fixtures_dir = "testdata"

# Glob patterns over root-relative directory paths to skip entirely
exclude = [
    # "**/vendor",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
