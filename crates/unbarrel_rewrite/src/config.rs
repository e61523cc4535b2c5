use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "rewrite")]
#[command(about = "Rewrite imports of a barrel module into direct imports")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source subtree, relative to the root
    #[arg(long, default_value = "src")]
    pub src_dir: PathBuf,

    /// Test subtree, relative to the root
    #[arg(long, default_value = "tests")]
    pub tests_dir: PathBuf,

    /// Barrel file, relative to the source subtree
    #[arg(long, default_value = "imports.ts")]
    pub barrel: PathBuf,
}

impl Config {
    /// Resolve the root directory (explicit flag, or the enclosing git root)
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            unbarrel_core::find_git_root(&env::current_dir()?)?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// Absolute path of the source subtree.
    pub fn src_root(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(&self.src_dir))
    }

    /// Absolute path of the test subtree.
    pub fn tests_root(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(&self.tests_dir))
    }

    /// Absolute path of the barrel file.
    pub fn barrel_file(&self) -> Result<PathBuf> {
        Ok(self.src_root()?.join(&self.barrel))
    }
}
