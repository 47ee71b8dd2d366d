//! Diagnostic logging on stderr.

use std::io::IsTerminal;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter directive for a `-v` count: `warn` by default, `debug` for `-v`,
/// `trace` for `-vv` and above.
#[must_use]
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Escape codes only for a terminal, and never when `NO_COLOR` is set.
#[must_use]
pub const fn ansi_enabled(is_tty: bool, no_color: bool) -> bool {
    is_tty && !no_color
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag. Later calls are no-ops.
pub fn init_tracing(verbose: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let ansi = ansi_enabled(
            std::io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        );
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("a global subscriber was already installed");
        }
    });
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
