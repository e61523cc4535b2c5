use std::path::PathBuf;

/// A symbol imported from the barrel module that the export index does not
/// know about. The symbol is dropped from the rewritten import.
#[derive(Debug, Clone)]
pub struct UnresolvedSymbol {
    pub symbol: String,
    pub file: PathBuf,
}

/// Result of rewriting a single file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub modified: bool,
    pub unresolved: Vec<UnresolvedSymbol>,
}

/// Aggregate result of a full run.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub symbols_indexed: usize,
    pub files_scanned: usize,
    pub files_rewritten: Vec<PathBuf>,
    pub unresolved: Vec<UnresolvedSymbol>,
}
