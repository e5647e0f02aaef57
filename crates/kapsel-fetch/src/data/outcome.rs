use crate::error::{DownloadError, FetchError};

/// How a streaming fetch ended. Transport failures are values, never panics or `Err`.
#[derive(Debug)]
pub enum FetchOutcome {
    Success { received: u64 },
    TransportError(FetchError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool { matches!(self, Self::Success { .. }) }
}

/// Final report for one [`DownloadRequest`](crate::DownloadRequest).
///
/// Produced once per request. It carries a digest only when the download succeeded
/// and a hash algorithm was requested.
#[derive(Debug)]
pub struct DownloadResult {
    hash:   Option<String>,
    errors: Vec<DownloadError>,
    bytes:  u64,
}

impl DownloadResult {
    pub(crate) fn committed(hash: Option<String>, bytes: u64) -> Self {
        Self {
            hash,
            errors: Vec::new(),
            bytes,
        }
    }

    pub(crate) fn discarded(errors: Vec<DownloadError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            hash: None,
            errors,
            bytes: 0,
        }
    }

    pub fn succeeded(&self) -> bool { self.errors.is_empty() }

    /// Lowercase hex digest of the committed file.
    pub fn hash(&self) -> Option<&str> { self.hash.as_deref() }

    pub fn errors(&self) -> &[DownloadError] { &self.errors }

    /// Human-readable form of [`errors`](Self::errors), in the order they occurred.
    pub fn messages(&self) -> Vec<String> { self.errors.iter().map(ToString::to_string).collect() }

    /// Bytes now present at the destination; zero unless the download succeeded.
    pub fn bytes_committed(&self) -> u64 { self.bytes }
}
