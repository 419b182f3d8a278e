//! Upward directory search for config files

use std::path::{Path, PathBuf};

use crate::paths;

/// Walk ancestor directories starting at `start_dir`, looking for `name`.
///
/// Each directory is checked for `name` and, when `name` lacks a `.json`
/// suffix, for `name` with `.json` appended. The search stops once the
/// current directory equals `stop_dir` (the filesystem root of `start_dir`
/// by default); the stop directory itself is never checked.
pub fn find_up(name: &str, start_dir: &Path, stop_dir: Option<&Path>) -> Option<PathBuf> {
    let stop = match stop_dir {
        Some(dir) => dir.to_path_buf(),
        None => filesystem_root(start_dir),
    };

    let mut dir = start_dir.to_path_buf();
    while dir != stop {
        let candidate = paths::join_normalized(&dir, name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !name.ends_with(".json") {
            let with_ext = paths::join_normalized(&dir, format!("{name}.json"));
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }
    None
}

fn filesystem_root(path: &Path) -> PathBuf {
    path.ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_file_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tsconfig.json"), "{}").unwrap();

        let found = find_up("tsconfig.json", temp_dir.path(), None);
        assert_eq!(found, Some(temp_dir.path().join("tsconfig.json")));
    }

    #[test]
    fn ascends_to_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("tsconfig.json"), "{}").unwrap();

        let found = find_up("tsconfig.json", &nested, None);
        assert_eq!(found, Some(temp_dir.path().join("tsconfig.json")));
    }

    #[test]
    fn appends_json_suffix() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tsconfig.base.json"), "{}").unwrap();

        let found = find_up("tsconfig.base", temp_dir.path(), None);
        assert_eq!(found, Some(temp_dir.path().join("tsconfig.base.json")));
    }

    #[test]
    fn does_not_append_suffix_to_json_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tsconfig.json.json"), "{}").unwrap();

        assert_eq!(find_up("tsconfig.json", temp_dir.path(), None), None);
    }

    #[test]
    fn stop_dir_is_never_checked() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("tsconfig.json"), "{}").unwrap();

        let found = find_up("tsconfig.json", &nested, Some(temp_dir.path()));
        assert_eq!(found, None);
    }

    #[test]
    fn relative_names_are_joined_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tsconfig.base.json"), "{}").unwrap();

        let found = find_up("./tsconfig.base.json", temp_dir.path(), None);
        assert_eq!(found, Some(temp_dir.path().join("tsconfig.base.json")));
    }
}
