use clap::Parser;

use copy_guard::cli::{Cli, Commands};
use copy_guard::commands::{run_check, run_init, run_layout};
use copy_guard::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Layout(args) => run_layout(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
