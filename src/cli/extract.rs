use clap::Parser;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print lines 3 to 9:\n    blockdeps extract demos/basic.tsx --range L3-L9\n\n\
                  Print the first match of a pattern:\n    blockdeps extract demos/basic.tsx --regexp '/export default.*?\\n\\}/s'")]
pub struct ExtractArgs {
    /// Source file
    pub file: PathBuf,

    /// Line range, as L<n> or L<n>-L<m>
    #[arg(long)]
    pub range: Option<String>,

    /// Pattern, as /body/flags or a bare regular expression
    #[arg(long)]
    pub regexp: Option<String>,
}
