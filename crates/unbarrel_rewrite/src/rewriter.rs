use anyhow::{Context, Result};
use log::{debug, trace, warn};
use std::{fs, path::Path};

use unbarrel_core::{ExportIndex, ImportMatcher, resolve_import_path};

use crate::types::{FileOutcome, UnresolvedSymbol};

/// Shared read-only state for rewriting one run's worth of files.
pub struct RewriteContext<'a> {
    pub src_root: &'a Path,
    pub index: &'a ExportIndex,
    pub matcher: &'a ImportMatcher,
}

/// Outcome of rewriting one file's text.
pub struct RewriteOutcome {
    /// New file contents, present only when at least one line matched.
    pub text: Option<String>,
    pub unresolved: Vec<UnresolvedSymbol>,
}

/// Rewrite every barrel import line in `text`, leaving all other lines
/// byte-identical. Pure: `file` participates only in path arithmetic.
pub fn rewrite_source(file: &Path, text: &str, ctx: &RewriteContext) -> RewriteOutcome {
    let mut out = String::with_capacity(text.len());
    let mut unresolved = Vec::new();
    let mut modified = false;

    for line in text.split_inclusive('\n') {
        let Some(import) = ctx.matcher.match_line(line) else {
            out.push_str(line);
            continue;
        };
        modified = true;
        trace!("Matched barrel import in {}: {}", file.display(), line.trim_end());

        let keyword = if import.type_only { "import type" } else { "import" };
        for (target, mut symbols) in group_by_target(file, &import.symbols, ctx, &mut unresolved) {
            symbols.sort();
            out.push_str(&format!("{keyword} {{ {} }} from \"{target}\";\n", symbols.join(", ")));
        }
    }

    RewriteOutcome { text: modified.then_some(out), unresolved }
}

/// Group symbols by resolved target path, preserving the order in which
/// target paths are first encountered. Unknown symbols are recorded and
/// dropped from the output.
fn group_by_target(
    file: &Path,
    symbols: &[String],
    ctx: &RewriteContext,
    unresolved: &mut Vec<UnresolvedSymbol>,
) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for symbol in symbols {
        let Some(declared) = ctx.index.lookup(symbol) else {
            warn!("Symbol '{}' not found in export index. File: {}", symbol, file.display());
            unresolved.push(UnresolvedSymbol { symbol: symbol.clone(), file: file.to_path_buf() });
            continue;
        };

        let target = resolve_import_path(ctx.src_root, file, declared);
        match groups.iter_mut().find(|(path, _)| *path == target) {
            Some((_, group)) => group.push(symbol.clone()),
            None => groups.push((target, vec![symbol.clone()])),
        }
    }

    groups
}

/// Read `file`, rewrite its barrel imports, and write it back only if a line
/// matched. A file without barrel imports is never written.
pub fn rewrite_file(file: &Path, ctx: &RewriteContext) -> Result<FileOutcome> {
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let outcome = rewrite_source(file, &text, ctx);
    let modified = outcome.text.is_some();

    if let Some(new_text) = &outcome.text {
        debug!("Writing rewritten imports to {}", file.display());
        fs::write(file, new_text).with_context(|| format!("Failed to write {}", file.display()))?;
    }

    Ok(FileOutcome { modified, unresolved: outcome.unresolved })
}
