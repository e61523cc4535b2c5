use log::trace;
use path_clean::clean;
use std::path::{Component, Path, PathBuf};

/// Compute the import path for `declared` (a path token relative to
/// `src_root`) as written from `from_file`.
///
/// The result always uses forward slashes and always starts with `./` or
/// `../`, so a same-directory import never degrades to a bare module name.
/// Pure path arithmetic: nothing is checked against the filesystem.
pub fn resolve_import_path(src_root: &Path, from_file: &Path, declared: &str) -> String {
    let target = clean(src_root.join(declared));
    let from_dir = from_file.parent().unwrap_or(src_root);
    let rel = make_relative(&target, from_dir).unwrap_or_else(|| target.clone());

    let mut path = forward_slashes(&rel);
    if !path.starts_with('.') {
        path = format!("./{path}");
    }
    trace!("Resolved '{}' from {} to '{}'", declared, from_file.display(), path);
    path
}

/// Create a relative path from `base` to `target` by comparing components.
pub(crate) fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    // Without a shared leading component (e.g. different prefixes) there is
    // no relative form.
    if target_parts.first() != base_parts.first() {
        return None;
    }

    let common = target_parts.iter().zip(&base_parts).take_while(|(t, b)| t == b).count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        match part {
            Component::Normal(p) => rel.push(p),
            Component::ParentDir => rel.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if rel.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(rel) }
}

fn forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_same_directory_gets_dot_slash() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/src/main.ts"),
            "./helpers",
        );
        assert_eq!(resolved, "./helpers");
    }

    #[test]
    fn test_resolve_nested_target_from_root() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/src/main.ts"),
            "./enumerator/IEnumerable",
        );
        assert_eq!(resolved, "./enumerator/IEnumerable");
    }

    #[test]
    fn test_resolve_walks_up_one_level_per_depth() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/src/a/b/c/file.ts"),
            "./Top",
        );
        assert_eq!(resolved, "../../../Top");
    }

    #[test]
    fn test_resolve_sibling_directory() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/src/a/x.ts"),
            "./b/Y",
        );
        assert_eq!(resolved, "../b/Y");
    }

    #[test]
    fn test_resolve_from_tests_tree() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/tests/enumerable.test.ts"),
            "./a/A",
        );
        assert_eq!(resolved, "../src/a/A");
    }

    #[test]
    fn test_resolve_target_on_ancestor_directory() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/src/a/b/file.ts"),
            "./a",
        );
        assert_eq!(resolved, "..");
    }

    #[test]
    fn test_resolve_uses_forward_slashes() {
        let resolved = resolve_import_path(
            Path::new("/project/src"),
            Path::new("/project/src/x/file.ts"),
            "./y/z/Thing",
        );
        assert!(!resolved.contains('\\'));
        assert_eq!(resolved, "../y/z/Thing");
    }

    #[test]
    fn test_make_relative_same_dir() {
        let result = make_relative(Path::new("/project/src/file.ts"), Path::new("/project/src"));
        assert_eq!(result, Some(PathBuf::from("file.ts")));
    }

    #[test]
    fn test_make_relative_child_dir() {
        let result = make_relative(
            Path::new("/project/src/components/Button.tsx"),
            Path::new("/project/src"),
        );
        assert_eq!(result, Some(PathBuf::from("components/Button.tsx")));
    }

    #[test]
    fn test_make_relative_parent_dir() {
        let result = make_relative(
            Path::new("/project/src/file.ts"),
            Path::new("/project/src/components"),
        );
        assert_eq!(result, Some(PathBuf::from("../file.ts")));
    }

    #[test]
    fn test_make_relative_sibling_dir() {
        let result =
            make_relative(Path::new("/project/apps/web/index.ts"), Path::new("/project/apps/api"));
        assert_eq!(result, Some(PathBuf::from("../web/index.ts")));
    }

    #[test]
    fn test_make_relative_same_path() {
        let result = make_relative(Path::new("/project/src"), Path::new("/project/src"));
        assert_eq!(result, Some(PathBuf::from(".")));
    }

    #[test]
    fn test_make_relative_multiple_levels_up() {
        let result =
            make_relative(Path::new("/project/file.ts"), Path::new("/project/apps/web/src"));
        assert_eq!(result, Some(PathBuf::from("../../../file.ts")));
    }

    #[test]
    fn test_make_relative_target_is_ancestor() {
        let result = make_relative(Path::new("/project/src"), Path::new("/project/src/a/b"));
        assert_eq!(result, Some(PathBuf::from("../..")));
    }
}
