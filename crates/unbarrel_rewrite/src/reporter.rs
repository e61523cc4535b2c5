use colored::Colorize;
use log::debug;
use std::{
    io::{self, Write},
    path::Path,
};

use crate::types::{RunResult, UnresolvedSymbol};

/// One line reporting how many symbols the barrel file declares.
pub fn print_index_summary<W: Write>(writer: &mut W, symbols: usize) -> io::Result<()> {
    writeln!(
        writer,
        "{} Found {} exported symbols.",
        "●".bright_blue(),
        symbols.to_string().cyan()
    )
}

/// One warning line per symbol the export index does not know about.
pub fn print_unresolved<W: Write>(writer: &mut W, unresolved: &UnresolvedSymbol) -> io::Result<()> {
    writeln!(
        writer,
        "{} Symbol '{}' not found in exports map. File: {}",
        "⚠".yellow().bold(),
        unresolved.symbol.yellow(),
        unresolved.file.display()
    )
}

/// One confirmation line per file actually written back.
pub fn print_updated<W: Write>(writer: &mut W, file: &Path) -> io::Result<()> {
    writeln!(writer, "{} Updated {}", "✓".green().bold(), file.display())
}

/// Printed instead of a summary when no file imported the barrel module.
pub fn print_nothing_to_rewrite<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No barrel imports found");
    writeln!(writer, "{} No barrel imports found. Nothing to rewrite.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

/// Closing summary for the run.
pub fn print_summary<W: Write>(writer: &mut W, result: &RunResult) -> io::Result<()> {
    debug!("Printing summary for {} scanned files", result.files_scanned);
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Files scanned: {}", result.files_scanned.to_string().cyan())?;
    writeln!(
        writer,
        "  Files rewritten: {}",
        result.files_rewritten.len().to_string().green().bold()
    )?;
    if result.unresolved.is_empty() {
        writeln!(writer, "  Unresolved symbols: {}", "0".green())?;
    } else {
        writeln!(
            writer,
            "  Unresolved symbols: {}",
            result.unresolved.len().to_string().yellow().bold()
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_index_summary_names_the_count() {
        let mut out = Vec::new();
        print_index_summary(&mut out, 42).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("exported symbols"));
        assert!(text.contains("42"));
    }

    #[test]
    fn test_unresolved_line_names_symbol_and_file() {
        let mut out = Vec::new();
        let unresolved = UnresolvedSymbol {
            symbol: "Missing".to_string(),
            file: PathBuf::from("/p/src/main.ts"),
        };
        print_unresolved(&mut out, &unresolved).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Missing"));
        assert!(text.contains("/p/src/main.ts"));
        assert!(text.contains("not found in exports map"));
    }

    #[test]
    fn test_summary_counts() {
        let mut out = Vec::new();
        let result = RunResult {
            symbols_indexed: 10,
            files_scanned: 7,
            files_rewritten: vec![PathBuf::from("/p/src/a.ts")],
            unresolved: Vec::new(),
        };
        print_summary(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Files scanned"));
        assert!(text.contains("Files rewritten"));
        assert!(text.contains("Unresolved symbols"));
    }
}
