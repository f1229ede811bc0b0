//! Extract command implementation

use blockdeps::content::{LineRange, extract_by_regexp, extract_range_lines};
use blockdeps::error::{Result, fs};

use crate::cli::ExtractArgs;

/// Run extract command
///
/// The range is applied first, then the pattern is matched within it. A
/// pattern that fails to compile or match prints the full (ranged) content.
pub fn run(args: ExtractArgs) -> Result<()> {
    let file = args.file.display().to_string();
    let mut content = std::fs::read_to_string(&args.file)
        .map_err(|e| fs::read_failed(file.clone(), e.to_string()))?;

    if let Some(range) = &args.range {
        LineRange::parse(range)?;
        content = extract_range_lines(&content, range);
    }

    if let Some(pattern) = &args.regexp {
        let extraction = extract_by_regexp(&content, pattern, &file);
        if let Some(diagnostic) = &extraction.diagnostic {
            log::warn!("Extract content failed, using the full content: {}", diagnostic);
        }
        content = extraction.content;
    }

    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }

    Ok(())
}
