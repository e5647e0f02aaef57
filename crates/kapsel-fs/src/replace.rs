//! Rename-over-existing with a backup fallback.
//!
//! Some filesystems refuse to rename onto an existing path. When that happens the
//! existing target is moved aside to `<target>.bak-<uuid>`, the rename is retried,
//! and the backup is either deleted (success) or moved back (failure).
//!
//! This is crash-resistant, not atomic: a crash after the target was moved aside
//! and before the retry or restore finished leaves the previous content only in
//! the backup file. Callers get no durability guarantee beyond that.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{Error, Result};

/// Filesystem calls the replace protocol is built from.
pub trait FileOps: Send + Sync {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`FileOps`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileOps;

impl FileOps for StdFileOps {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> { std::fs::rename(from, to) }

    fn remove_file(&self, path: &Path) -> io::Result<()> { std::fs::remove_file(path) }
}

/// Make `staging` become `target`, keeping the previous `target` if that fails.
pub fn rename_over_existing(staging: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    rename_over_existing_with(&StdFileOps, staging, target)
}

/// [`rename_over_existing`] through an explicit set of [`FileOps`].
pub fn rename_over_existing_with<F: FileOps + ?Sized>(
    ops: &F,
    staging: impl AsRef<Path>,
    target: impl AsRef<Path>,
) -> Result<()> {
    let staging = staging.as_ref();
    let target = target.as_ref();

    let refused = match ops.rename(staging, target) {
        Ok(()) => return Ok(()),
        Err(e) if refuses_overwrite(&e) => e,
        Err(source) => {
            return Err(Error::Rename {
                from: staging.to_path_buf(),
                to: target.to_path_buf(),
                source,
            });
        }
    };

    let backup = backup_path(target);
    tracing::debug!(
        path = %target.display(),
        backup = %backup.display(),
        error = %refused,
        "rename refused to overwrite, moving existing file aside"
    );

    ops.rename(target, &backup).map_err(|source| Error::Rename {
        from: target.to_path_buf(),
        to: backup.clone(),
        source,
    })?;

    match ops.rename(staging, target) {
        Ok(()) => {
            if let Err(e) = ops.remove_file(&backup) {
                tracing::debug!(backup = %backup.display(), error = %e, "leaving stale backup behind");
            }
            Ok(())
        }
        Err(source) => match ops.rename(&backup, target) {
            Ok(()) => Err(Error::Rename {
                from: staging.to_path_buf(),
                to: target.to_path_buf(),
                source,
            }),
            Err(restore) => Err(Error::ReplaceFailed {
                staging: staging.to_path_buf(),
                target: target.to_path_buf(),
                backup,
                source,
                restore,
            }),
        },
    }
}

/// Unique sibling path the current `target` is moved to during a replace.
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".bak-");
    name.push(Uuid::new_v4().to_string());
    PathBuf::from(name)
}

fn refuses_overwrite(err: &io::Error) -> bool { err.kind() == io::ErrorKind::AlreadyExists }
