use clap::Parser;
use std::path::PathBuf;

/// Entry files picked up by `batch` unless `--glob` says otherwise
pub const DEFAULT_ENTRY_GLOB: &str = "**/*.{js,jsx,ts,tsx}";

/// Arguments for the batch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build every demo under a directory:\n    blockdeps batch src/demos\n\n\
                  Only TypeScript demos, four at a time:\n    blockdeps batch src --glob '**/demos/*.tsx' --jobs 4")]
pub struct BatchArgs {
    /// Directory to search for entry files
    pub dir: PathBuf,

    /// Glob for entry files, relative to DIR
    #[arg(long, short = 'g', default_value = DEFAULT_ENTRY_GLOB)]
    pub glob: String,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
