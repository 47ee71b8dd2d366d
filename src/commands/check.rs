use std::ffi::OsStr;

use crate::cli::{CheckArgs, Cli};
use crate::config::SEARCH_PATH_ENV;
use crate::output::{
    ColorMode, CompactFormatter, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress,
    TextFormatter, print_error, render,
};
use crate::resolver::ModelResolver;
use crate::EXIT_ERROR;

use super::context::{AnalysisContext, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_ERROR
        }
    }
}

/// # Errors
/// Returns any configuration, resolution or output error.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let env_roots = std::env::var_os(SEARCH_PATH_ENV);
    run_check_with_env(args, cli, env_roots.as_deref())
}

pub(crate) fn run_check_with_env(
    args: &CheckArgs,
    cli: &Cli,
    env_roots: Option<&OsStr>,
) -> crate::Result<i32> {
    let ctx = AnalysisContext::prepare(&args.analysis, cli.no_config, env_roots)?;
    let resolver = ModelResolver;
    let analyzer = ctx.analyzer(&resolver)?;

    let dirs = analyzer.directories(&ctx.scope)?;
    let total = u64::try_from(dirs.len()).unwrap_or(u64::MAX);
    let progress = ScanProgress::new(total, cli.quiet);
    let diagnostics = analyzer.check_directories(&ctx.scope, &dirs, &progress);
    progress.finish();

    let formatter = formatter_for(args.format, cli.color.into());
    let report = render(diagnostics?, formatter.as_ref())?;
    write_output(args.output.as_deref(), &report.text, cli.quiet)?;
    Ok(report.exit_signal.exit_code())
}

pub(crate) fn formatter_for(format: OutputFormat, color: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Compact => Box::new(CompactFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
