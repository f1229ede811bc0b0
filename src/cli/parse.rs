use clap::Parser;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the block asset as JSON:\n    blockdeps parse demos/basic.tsx\n\n\
                  Set the asset id and the atoms it demonstrates:\n    blockdeps parse demos/basic.tsx --id button-basic --ref-atom-id Button\n\n\
                  Use code from stdin instead of the file on disk:\n    cat draft.tsx | blockdeps parse demos/basic.tsx --stdin\n\n\
                  Show a summary instead of JSON:\n    blockdeps parse demos/basic.tsx --summary")]
pub struct ParseArgs {
    /// Entry file of the code block
    pub entry: PathBuf,

    /// Asset id (defaults to the entry's file stem)
    #[arg(long)]
    pub id: Option<String>,

    /// Id of an atom this block demonstrates (repeatable)
    #[arg(long = "ref-atom-id", value_name = "ID")]
    pub ref_atom_ids: Vec<String>,

    /// Read the entry code from this file instead of ENTRY
    #[arg(long, value_name = "FILE", conflicts_with = "stdin")]
    pub code_file: Option<PathBuf>,

    /// Read the entry code from stdin instead of ENTRY
    #[arg(long)]
    pub stdin: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    pub summary: bool,
}
