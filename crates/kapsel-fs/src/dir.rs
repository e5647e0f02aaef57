use std::path::Path;

use crate::{Error, Result};

/// Create `path` and any missing ancestors.
///
/// An empty path means "the current directory" and is accepted as is. A directory
/// that already exists, or that appears concurrently while we create it, is not an
/// error; anything else in the way (a regular file, missing permissions) is.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(());
    }

    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(source) => Err(Error::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Directory that holds `file`, or an empty path when `file` has no parent component.
pub fn parent_dir(file: &Path) -> &Path { file.parent().unwrap_or(Path::new("")) }

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_ancestors() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let dir = tempdir().unwrap();
        ensure_dir(dir.path()).unwrap();
        ensure_dir(dir.path()).unwrap();
    }

    #[test]
    fn test_ensure_dir_empty_path() {
        ensure_dir("").unwrap();
    }

    #[test]
    fn test_ensure_dir_file_in_the_way() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_dir(blocker.join("child")).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
        assert!(err.to_string().contains("could not create directory"));
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("a/b.txt")), Path::new("a"));
        assert_eq!(parent_dir(Path::new("b.txt")), Path::new(""));
    }
}
