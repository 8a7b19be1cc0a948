//! descver CLI entry point

use clap::Parser;
use descver::cli::{self, Cli};
use descver::logging::{Level, setup_logging};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(if cli.verbose {
        Level::Verbose
    } else {
        Level::Default
    });

    let exit_code = cli::run(&cli, &mut std::io::stdout().lock());

    process::exit(exit_code);
}
