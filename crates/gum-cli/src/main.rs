mod cli;

use crate::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Argument errors (zero or extra positionals handled by clap) exit here.
    let cli = Cli::parse();
    cli.execute()
}
