//! Filesystem primitives for single-file downloads.
//!
//! - [`ensure_dir`] prepares a destination directory, tolerating one that already exists
//! - [`StagingFile`] names `<target>.part` and removes it on every exit path
//! - [`rename_over_existing`] promotes a staged file over its target, falling back to
//!   a backup-and-retry dance where the filesystem refuses to overwrite by rename
//!
//! The [`FileOps`] seam lets callers inject rename and removal failures.

mod dir;
mod error;
mod replace;
mod staging;

pub use dir::{ensure_dir, parent_dir};
pub use error::{Error, Result};
pub use replace::{FileOps, StdFileOps, backup_path, rename_over_existing, rename_over_existing_with};
pub use staging::{STAGING_SUFFIX, StagingFile};
