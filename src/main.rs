mod classifier;
mod cli;
mod error;
mod fmt;
mod index;
mod models;
mod parser;
mod summary;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { input, output } => cli::run::run(&input, output.as_deref()),
        Commands::Report { input, json } => cli::report::run(&input, json),
        Commands::Check { input } => cli::check::run(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
