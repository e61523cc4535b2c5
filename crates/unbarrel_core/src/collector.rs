use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::TS_EXTENSIONS;

/// Collect every TypeScript file under `root`, skipping `exclude` if given.
///
/// Returns a sorted list so processing order does not depend on directory
/// enumeration order. A missing `root` yields an empty list.
pub fn collect_ts_files(root: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        debug!("Skipping missing directory: {}", root.display());
        return Ok(Vec::new());
    }

    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root).hidden(false).ignore(true).git_ignore(true).build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !TS_EXTENSIONS.contains(&ext) {
            continue;
        }

        if exclude.is_some_and(|x| x == p) {
            trace!("Skipping excluded file: {}", p.display());
            continue;
        }

        files.push(p.to_path_buf());
    }

    files.sort();
    debug!("Collected {} files under {}", files.len(), root.display());
    Ok(files)
}
