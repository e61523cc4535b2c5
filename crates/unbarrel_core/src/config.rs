use anyhow::{Result, anyhow};
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// Walk upward from `start` until a directory containing `.git` is found.
pub fn find_git_root(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root from {}", start.display());
    let mut current = start.to_path_buf();

    loop {
        let git_dir = current.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current);
            return Ok(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(anyhow!(
                    "Could not find .git directory in any parent of {}",
                    start.display()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_git_root_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let subdir = root.join("src").join("components");
        fs::create_dir_all(&subdir).unwrap();

        let git_root = find_git_root(&subdir).unwrap();
        assert_eq!(git_root, root);
    }

    #[test]
    fn test_find_git_root_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("nested").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let result = find_git_root(&subdir);
        assert!(result.is_err());
    }
}
