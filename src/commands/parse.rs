//! Parse command implementation
//!
//! Builds one block asset and prints it as JSON or as a summary.

use std::io::Read;
use std::path::{Path, PathBuf};

use console::Style;

use blockdeps::config::ResolveConfig;
use blockdeps::error::{Result, fs};
use blockdeps::path_utils::absolutize;
use blockdeps::{AssetBuilder, BuildContext, Dependency, ParsedBlockAsset};

use crate::cli::ParseArgs;

/// Run parse command
pub fn run(config: Option<PathBuf>, args: ParseArgs) -> Result<()> {
    let entry = absolutize(&args.entry)?;
    let context = build_context(&entry, &args)?;

    let resolve_config = ResolveConfig::discover(config.as_deref(), context.entry_dir())?;
    let parsed = AssetBuilder::new(resolve_config).build(&context)?;

    if args.summary {
        print_summary(&parsed);
    } else {
        println!("{}", to_json(&parsed, args.pretty)?);
    }

    Ok(())
}

fn build_context(entry: &Path, args: &ParseArgs) -> Result<BuildContext> {
    let id = args.id.clone().unwrap_or_else(|| default_id(entry));
    let context =
        BuildContext::new(entry, id).with_ref_atom_ids(args.ref_atom_ids.iter().cloned());

    Ok(match read_entry_override(args)? {
        Some(code) => context.with_entry_point_code(code),
        None => context,
    })
}

/// Asset id when none is given: the entry's file stem
pub fn default_id(entry: &Path) -> String {
    entry
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_entry_override(args: &ParseArgs) -> Result<Option<String>> {
    if args.stdin {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .map_err(|e| fs::read_failed("<stdin>", e.to_string()))?;
        return Ok(Some(code));
    }

    match &args.code_file {
        Some(path) => std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string())),
        None => Ok(None),
    }
}

/// Serialize a build result
pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn print_summary(parsed: &ParsedBlockAsset) {
    let asset = &parsed.asset;
    let bold = Style::new().bold();

    println!("  {}", Style::new().bold().yellow().apply_to(&asset.id));
    if let Some(title) = asset.title_str() {
        println!("    {} {}", bold.apply_to("Title:"), title);
    }
    if !asset.ref_atom_ids.is_empty() {
        println!(
            "    {} {}",
            bold.apply_to("Atoms:"),
            asset.ref_atom_ids.join(", ")
        );
    }

    let (packages, files): (Vec<_>, Vec<_>) =
        asset.dependencies.iter().partition(|(_, dep)| dep.is_npm());

    println!("    {} ({})", bold.apply_to("Packages:"), packages.len());
    for (name, dep) in &packages {
        println!(
            "      {} {}",
            Style::new().cyan().apply_to(name),
            Style::new().dim().apply_to(dep.value())
        );
    }

    println!("    {} ({})", bold.apply_to("Files:"), files.len());
    for (key, dep) in &files {
        let lines = match dep {
            Dependency::File(content) => content.lines().count(),
            Dependency::Npm(_) => 0,
        };
        let label = if lines == 1 { "line" } else { "lines" };
        println!(
            "      {} {}",
            Style::new().green().apply_to(key),
            Style::new().dim().apply_to(format!("({} {})", lines, label))
        );
    }
}
