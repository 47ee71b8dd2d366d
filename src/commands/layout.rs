use std::ffi::OsStr;

use crate::cli::{Cli, LayoutArgs};
use crate::config::SEARCH_PATH_ENV;
use crate::output::{LayoutFormatter, print_error};
use crate::resolver::ModelResolver;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{AnalysisContext, write_output};

#[must_use]
pub fn run_layout(args: &LayoutArgs, cli: &Cli) -> i32 {
    match run_layout_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_ERROR
        }
    }
}

/// Prints the layout of every composite type in the scope.
///
/// # Errors
/// Returns any configuration, resolution or layout error.
pub fn run_layout_impl(args: &LayoutArgs, cli: &Cli) -> crate::Result<()> {
    let env_roots = std::env::var_os(SEARCH_PATH_ENV);
    let text = render_layout(args, cli, env_roots.as_deref())?;
    write_output(None, &text, cli.quiet)
}

pub(crate) fn render_layout(
    args: &LayoutArgs,
    cli: &Cli,
    env_roots: Option<&OsStr>,
) -> crate::Result<String> {
    let ctx = AnalysisContext::prepare(&args.analysis, cli.no_config, env_roots)?;
    let resolver = ModelResolver;
    let layouts = ctx.analyzer(&resolver)?.explain_layouts(&ctx.scope)?;
    Ok(LayoutFormatter::new(cli.color.into()).format(&layouts))
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
