//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - parse: Parse command arguments
//! - batch: Batch command arguments
//! - extract: Extract command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod batch;
pub mod completions;
pub mod extract;
pub mod parse;

pub use batch::BatchArgs;
pub use completions::CompletionsArgs;
pub use extract::ExtractArgs;
pub use parse::ParseArgs;

/// blockdeps - static dependency collector for code blocks
///
/// Collects the local files and installed packages a demo snippet depends on.
#[derive(Parser, Debug)]
#[command(
    name = "blockdeps",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Static dependency collector for code block snippets",
    long_about = "blockdeps walks the import graph of a demo entry file and reports every \
                  local file it reaches (with source text), every installed package it imports \
                  (with version), and metadata from a leading doc comment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  blockdeps parse demos/basic.tsx                \x1b[90m# Print the block asset as JSON\x1b[0m\n   \
                  blockdeps parse demos/basic.tsx --summary      \x1b[90m# Human-readable summary\x1b[0m\n   \
                  blockdeps batch src --jobs 4                   \x1b[90m# Build every demo under src\x1b[0m\n   \
                  blockdeps extract demos/basic.tsx --range L3-L9 \x1b[90m# Print lines 3 to 9\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Resolution config file (defaults to blockdeps.yaml next to the entry)
    #[arg(long, short = 'c', global = true, env = "BLOCKDEPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the block asset for one entry file
    Parse(ParseArgs),

    /// Build block assets for every entry file under a directory
    Batch(BatchArgs),

    /// Print a line range or pattern match from a file
    Extract(ExtractArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
