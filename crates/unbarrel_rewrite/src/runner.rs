use anyhow::{Result, anyhow};
use log::{debug, info};
use std::io::Write;

use unbarrel_core::{ImportMatcher, collect_ts_files, index_barrel_file};

use crate::{
    config::Config,
    reporter,
    rewriter::{RewriteContext, rewrite_file},
    types::RunResult,
};

/// Run the full rewrite: index the barrel once, then rewrite every eligible
/// file in the source tree (except the barrel itself) and the test tree,
/// fully sequentially.
///
/// Progress lines go to `out` as files are processed. An unreadable barrel
/// file aborts before anything is written; a later I/O failure stops the run
/// mid-tree, leaving already-rewritten files in place.
pub fn run_rewrite<W: Write>(mut cfg: Config, out: &mut W) -> Result<RunResult> {
    info!("Starting barrel import rewrite");
    cfg.initialize()?;

    let src_root = cfg.src_root()?;
    let tests_root = cfg.tests_root()?;
    let barrel = cfg.barrel_file()?;

    let index = index_barrel_file(&barrel)?;
    reporter::print_index_summary(out, index.len())?;

    let stem = barrel
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("Barrel file {} has no usable name", barrel.display()))?;
    let matcher = ImportMatcher::new(stem)?;

    let mut files = collect_ts_files(&src_root, Some(&barrel))?;
    files.extend(collect_ts_files(&tests_root, None)?);
    info!("Processing {} files", files.len());

    let ctx = RewriteContext { src_root: &src_root, index: &index, matcher: &matcher };

    let mut result = RunResult { symbols_indexed: index.len(), ..Default::default() };
    for file in files {
        debug!("Processing {}", file.display());
        let outcome = rewrite_file(&file, &ctx)?;
        result.files_scanned += 1;

        for unresolved in &outcome.unresolved {
            reporter::print_unresolved(out, unresolved)?;
        }
        result.unresolved.extend(outcome.unresolved);

        if outcome.modified {
            reporter::print_updated(out, &file)?;
            result.files_rewritten.push(file);
        }
    }

    info!(
        "Rewrite complete: {} of {} files updated",
        result.files_rewritten.len(),
        result.files_scanned
    );
    Ok(result)
}
