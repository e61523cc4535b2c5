use anyhow::{Context, Result};
use log::{debug, trace};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::types::{ExportIndex, ImportLine};

/// Matches aggregating re-export statements in the barrel file:
/// `export { A, B } from "./path";` or `export type { C } from './path';`.
/// The symbol list may span multiple lines.
static EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"export\s+(?:type\s+)?\{([^}]+)\}\s+from\s+["']([^"']+)["'];"#).unwrap()
});

/// Build the export index from the barrel file's full text.
///
/// Later statements overwrite earlier mappings for the same symbol name.
pub fn parse_barrel_exports(text: &str) -> ExportIndex {
    let mut index = ExportIndex::default();
    for caps in EXPORT_RE.captures_iter(text) {
        let declared = &caps[2];
        for entry in split_symbols(&caps[1]) {
            let symbol = local_name(&entry);
            trace!("Indexed export '{}' -> '{}'", symbol, declared);
            index.insert(symbol.to_string(), declared.to_string());
        }
    }
    index
}

/// Read the barrel file and build the export index.
///
/// An unreadable barrel file is fatal: nothing has been rewritten yet, so
/// the caller aborts with the error.
pub fn index_barrel_file(path: &Path) -> Result<ExportIndex> {
    debug!("Indexing barrel file: {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read barrel file {}", path.display()))?;
    let index = parse_barrel_exports(&text);
    debug!("Indexed {} exported symbols from {}", index.len(), path.display());
    Ok(index)
}

/// Per-line matcher for imports of the barrel module.
///
/// A line matches when it imports a braced symbol list from a quoted path
/// ending in the barrel module's stem, e.g. `import { A, B } from
/// "../imports";`. An import wrapped across several physical lines is not
/// recognized; only the barrel file itself gets multiline-tolerant matching.
pub struct ImportMatcher {
    re: Regex,
}

impl ImportMatcher {
    pub fn new(barrel_stem: &str) -> Result<Self> {
        let pattern = format!(
            r#"import\s+(type\s+)?\{{([^}}]+)\}}\s+from\s+["'][^"']*{}["'];"#,
            regex::escape(barrel_stem)
        );
        let re = Regex::new(&pattern)
            .with_context(|| format!("Invalid barrel module name '{barrel_stem}'"))?;
        Ok(Self { re })
    }

    pub fn match_line(&self, line: &str) -> Option<ImportLine> {
        let caps = self.re.captures(line)?;
        Some(ImportLine { type_only: caps.get(1).is_some(), symbols: split_symbols(&caps[2]) })
    }
}

/// Split a brace-delimited symbol list on commas, trimming whitespace and
/// dropping empty entries left by trailing commas.
fn split_symbols(list: &str) -> Vec<String> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// For a rename clause `Orig as Local`, the barrel exports the local name.
fn local_name(entry: &str) -> &str {
    match entry.split_once(" as ") {
        Some((_, local)) => local.trim(),
        None => entry,
    }
}
