//! verbump CLI entry point

use clap::Parser;
use std::process;
use verbump::cli::{Cli, RunContext};

fn main() {
    let cli = Cli::parse();
    verbump::logging::init_logging(cli.verbose);

    let ctx = RunContext::from_cli(&cli);
    let exit_code = verbump::cli::dispatch(&ctx, cli.command);

    process::exit(exit_code);
}
