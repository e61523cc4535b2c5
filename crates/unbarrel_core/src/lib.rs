//! Core primitives for the unbarrel tools.
//!
//! This crate provides the building blocks for flattening barrel imports in
//! TypeScript projects:
//! - Parsing aggregating re-export statements from a barrel file
//! - Recognizing import lines that reference the barrel module
//! - Computing per-file relative import paths
//! - Collecting eligible TypeScript files from a directory tree

mod collector;
mod config;
mod constants;
mod parser;
mod resolver;
mod types;

// Re-export public API
pub use collector::collect_ts_files;
pub use config::find_git_root;
pub use constants::TS_EXTENSIONS;
pub use parser::{ImportMatcher, index_barrel_file, parse_barrel_exports};
pub use resolver::resolve_import_path;
pub use types::{ExportIndex, ImportLine};
