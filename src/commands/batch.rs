//! Batch command implementation
//!
//! Builds every entry file under a directory. Each build runs in isolation on
//! one of a fixed set of worker threads; results are collected on the main
//! thread and printed as one JSON object keyed by relative path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::{DirEntry, WalkDir};
use wax::{Glob, Pattern};

use blockdeps::config::ResolveConfig;
use blockdeps::error::{BlockError, Result, extract, fs};
use blockdeps::path_utils::{absolutize, relative_key};
use blockdeps::{AssetBuilder, BuildContext, ParsedBlockAsset};

use crate::cli::BatchArgs;
use crate::commands::parse::{default_id, to_json};

/// One entry file found by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFile {
    /// Forward-slash path relative to the batch root
    pub key: String,
    pub path: PathBuf,
}

/// Run batch command
pub fn run(config: Option<PathBuf>, args: BatchArgs) -> Result<()> {
    let root = absolutize(&args.dir)?;
    if !root.is_dir() {
        return Err(fs::walk_failed(
            root.display().to_string(),
            "not a directory",
        ));
    }

    let entries = discover_entries(&root, &args.glob)?;
    log::debug!("Found {} entries under {}", entries.len(), root.display());

    let resolve_config = ResolveConfig::discover(config.as_deref(), &root)?;
    let builder = AssetBuilder::new(resolve_config);
    let jobs = worker_count(args.jobs, entries.len());

    let progress = progress_bar(entries.len() as u64);
    let outcomes = build_all(&builder, &entries, jobs, &progress);
    progress.finish_and_clear();

    let total = outcomes.len();
    let mut built = BTreeMap::new();
    let mut failed = 0;
    for (key, outcome) in outcomes {
        match outcome {
            Ok(parsed) => {
                built.insert(key, parsed);
            }
            Err(err) => {
                failed += 1;
                eprintln!(
                    "{} {}: {}",
                    Style::new().red().bold().apply_to("failed"),
                    key,
                    err
                );
            }
        }
    }

    println!("{}", to_json(&built, args.pretty)?);

    if failed > 0 {
        return Err(BlockError::BatchFailed { failed, total });
    }
    Ok(())
}

/// Entry files under `root` matching `pattern`, sorted by key
///
/// Hidden directories and `node_modules` are never entered.
pub fn discover_entries(root: &Path, pattern: &str) -> Result<Vec<EntryFile>> {
    let glob = Glob::new(pattern).map_err(|e| extract::invalid_pattern(pattern, e.to_string()))?;

    let mut entries = Vec::new();
    for item in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
    {
        let item =
            item.map_err(|e| fs::walk_failed(root.display().to_string(), e.to_string()))?;
        if !item.file_type().is_file() {
            continue;
        }

        let key = relative_key(root, item.path());
        if glob.is_match(key.as_str()) {
            entries.push(EntryFile {
                key,
                path: item.path().to_path_buf(),
            });
        }
    }

    entries.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(entries)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name == "node_modules" || name.starts_with('.')
}

fn worker_count(requested: Option<usize>, entries: usize) -> usize {
    let available = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    requested.unwrap_or(available).clamp(1, entries.max(1))
}

fn progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

type Outcome = (String, Result<ParsedBlockAsset>);

/// Build every entry on `jobs` threads; outcomes come back in completion order
fn build_all(
    builder: &AssetBuilder,
    entries: &[EntryFile],
    jobs: usize,
    progress: &ProgressBar,
) -> Vec<Outcome> {
    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<Outcome>();

    thread::scope(|scope| {
        for _ in 0..jobs {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || {
                while let Some(entry) = entries.get(next.fetch_add(1, Ordering::Relaxed)) {
                    let context = BuildContext::new(&entry.path, default_id(&entry.path));
                    let outcome = builder.build(&context);
                    if tx.send((entry.key.clone(), outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        let mut outcomes = Vec::with_capacity(entries.len());
        for (key, outcome) in rx {
            progress.set_message(key.clone());
            progress.inc(1);
            outcomes.push((key, outcome));
        }
        outcomes
    })
}
