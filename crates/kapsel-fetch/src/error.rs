//! Error types for kapsel-fetch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a transfer ended without delivering the whole body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("response body of {size} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { limit: u64, size: u64 },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl FetchError {
    /// Flatten an error and its source chain into one transport message.
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::Transport(message)
    }
}

/// One entry of a download's error list.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("{source}")]
    DirectoryCreation {
        path:   PathBuf,
        source: kapsel_fs::Error,
    },

    #[error("failed to open {}: {source}", path.display())]
    StagingOpen { path: PathBuf, source: io::Error },

    #[error("failed to write to {}: {source}", path.display())]
    StagingWrite { path: PathBuf, source: io::Error },

    #[error("failed download to {}: {source}", destination.display())]
    Transport {
        destination: PathBuf,
        source:      FetchError,
    },

    /// The replace failed but the destination was left as it was.
    #[error("{source}")]
    Rename {
        staging: PathBuf,
        target:  PathBuf,
        source:  kapsel_fs::Error,
    },

    /// The replace failed and the previous destination content only survives in `backup`.
    #[error("{source}")]
    ReplaceFailed {
        staging: PathBuf,
        target:  PathBuf,
        backup:  PathBuf,
        source:  kapsel_fs::Error,
    },
}

impl DownloadError {
    pub(crate) fn replace(staging: PathBuf, target: PathBuf, source: kapsel_fs::Error) -> Self {
        match source.backup_path() {
            Some(backup) => Self::ReplaceFailed {
                staging,
                target,
                backup: backup.to_path_buf(),
                source,
            },
            None => Self::Rename {
                staging,
                target,
                source,
            },
        }
    }

    /// True when the destination may have been lost and needs manual recovery.
    pub fn is_destructive(&self) -> bool { matches!(self, Self::ReplaceFailed { .. }) }
}
