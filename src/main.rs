//! CLI entry point for the generative typography renderer

use clap::Parser;
use typocut::io::cli::{Cli, CommandRunner};

fn main() -> typocut::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runner = CommandRunner::new(cli);
    runner.run()
}
