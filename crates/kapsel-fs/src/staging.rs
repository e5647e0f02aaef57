use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::replace::{FileOps, StdFileOps, rename_over_existing_with};
use crate::Result;

/// Suffix appended to a target path to name its in-flight copy.
pub const STAGING_SUFFIX: &str = ".part";

/// `<target>.part`, owned by one in-flight download.
///
/// The staging file is removed when the guard drops, whichever way the download
/// ends. After a successful [`promote`](Self::promote) there is nothing left to
/// remove.
pub struct StagingFile {
    path:   PathBuf,
    target: PathBuf,
}

impl StagingFile {
    pub fn for_target(target: impl AsRef<Path>) -> Self {
        let target = target.as_ref().to_path_buf();
        let mut name = OsString::from(target.as_os_str());
        name.push(STAGING_SUFFIX);
        Self {
            path: PathBuf::from(name),
            target,
        }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn target(&self) -> &Path { &self.target }

    /// Replace the target with the staged bytes. The caller must have closed
    /// every handle it holds on the staging file.
    pub fn promote(&self) -> Result<()> { self.promote_with(&StdFileOps) }

    pub fn promote_with<F: FileOps + ?Sized>(&self, ops: &F) -> Result<()> {
        rename_over_existing_with(ops, &self.path, &self.target)
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::trace!(path = %self.path.display(), "removed staging file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "could not remove staging file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_staging_path() {
        let staging = StagingFile::for_target("downloads/data.csv");
        assert_eq!(staging.path(), Path::new("downloads/data.csv.part"));
        assert_eq!(staging.target(), Path::new("downloads/data.csv"));
    }

    #[test]
    fn test_promote() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("data.csv");
        let staging = StagingFile::for_target(&target);
        std::fs::write(staging.path(), "a,b\n").unwrap();

        staging.promote().unwrap();
        drop(staging);

        assert_eq!(std::fs::read(&target).unwrap(), b"a,b\n");
        assert!(!dir.path().join("data.csv.part").exists());
    }

    #[test]
    fn test_cleanup_on_drop() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("data.csv");
        {
            let staging = StagingFile::for_target(&target);
            std::fs::write(staging.path(), "partial").unwrap();
            assert!(staging.path().exists());
        }
        assert!(!dir.path().join("data.csv.part").exists());
        assert!(!target.exists());
    }

    #[test]
    fn test_drop_without_file() {
        let dir = tempdir().unwrap();
        drop(StagingFile::for_target(dir.path().join("never-written")));
    }
}
