//! Lexical path helpers

use std::path::{Component, Path, PathBuf};

/// Join `base` and `tail`, then clean the result lexically. An absolute
/// `tail` replaces `base` entirely.
pub(crate) fn join_normalized(base: &Path, tail: impl AsRef<Path>) -> PathBuf {
    normalize(&base.join(tail))
}

/// Collapse `.` and `..` components without touching the file system.
///
/// Symlinks are deliberately not resolved; paths compare the way the user
/// spelled them.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_plain_segments() {
        assert_eq!(
            join_normalized(Path::new("/a/b"), "c.json"),
            PathBuf::from("/a/b/c.json")
        );
    }

    #[test]
    fn join_collapses_cur_dir() {
        assert_eq!(
            join_normalized(Path::new("/a/b"), "./c.json"),
            PathBuf::from("/a/b/c.json")
        );
        assert_eq!(join_normalized(Path::new("/a/b"), "."), PathBuf::from("/a/b"));
    }

    #[test]
    fn join_collapses_parent_dir() {
        assert_eq!(
            join_normalized(Path::new("/a/b"), "../c.json"),
            PathBuf::from("/a/c.json")
        );
    }

    #[test]
    fn absolute_tail_replaces_base() {
        assert_eq!(
            join_normalized(Path::new("/a/b"), "/x/y"),
            PathBuf::from("/x/y")
        );
    }

    #[test]
    fn normalize_is_lexical() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
    }
}
