use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from:   PathBuf,
        to:     PathBuf,
        source: io::Error,
    },

    #[error(
        "failed to replace {} with {}: {source}; restoring the original also failed ({restore}), \
         previous content left at {}",
        target.display(),
        staging.display(),
        backup.display()
    )]
    ReplaceFailed {
        staging: PathBuf,
        target:  PathBuf,
        backup:  PathBuf,
        source:  io::Error,
        restore: io::Error,
    },

    #[error("failed to remove {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },
}

impl Error {
    /// True when the original target content may only survive in a backup file.
    pub fn is_destructive(&self) -> bool { matches!(self, Self::ReplaceFailed { .. }) }

    /// Backup left behind for manual recovery, if any.
    pub fn backup_path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ReplaceFailed { backup, .. } => Some(backup),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
