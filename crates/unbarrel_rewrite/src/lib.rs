//! Barrel import flattening for TypeScript projects.
//!
//! This crate rewrites imports of a single barrel module (a file that only
//! re-exports symbols defined elsewhere) into direct imports from the
//! defining modules, with relative paths computed per importing file.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use unbarrel_rewrite::{Config, run_rewrite};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     src_dir: "src".into(),
//!     tests_dir: "tests".into(),
//!     barrel: "imports.ts".into(),
//! };
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let result = run_rewrite(cfg, &mut stdout)?;
//! unbarrel_rewrite::print_summary(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod reporter;
mod rewriter;
mod runner;
mod types;

// Re-export public API
pub use config::Config;
pub use reporter::{print_nothing_to_rewrite, print_summary};
pub use rewriter::{RewriteContext, RewriteOutcome, rewrite_file, rewrite_source};
pub use runner::run_rewrite;
pub use types::{FileOutcome, RunResult, UnresolvedSymbol};
