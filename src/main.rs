//! blockdeps - static dependency collector for code blocks
//!
//! Command line front end over the `blockdeps` library: builds block assets
//! for single entries or whole directories and prints them as JSON.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Default log filter; `-v` raises it, `RUST_LOG` overrides both
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse(args) => commands::parse::run(cli.config, args),
        Commands::Batch(args) => commands::batch::run(cli.config, args),
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        if cli.verbose {
            eprintln!("{:?}", miette::Report::new(e));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
