use crate::error::DownloadError;

/// Append-only list of errors for one download.
///
/// The first entry trips the sink for good: callers check [`is_empty`](Self::is_empty)
/// before doing more work, so nothing is written after the first failure.
#[derive(Debug, Default)]
pub struct ErrorSink {
    errors: Vec<DownloadError>,
}

impl ErrorSink {
    pub fn record(&mut self, error: DownloadError) {
        tracing::debug!(error = %error, "download error recorded");
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool { self.errors.is_empty() }

    pub fn len(&self) -> usize { self.errors.len() }

    pub fn iter(&self) -> impl Iterator<Item = &DownloadError> { self.errors.iter() }

    pub fn into_vec(self) -> Vec<DownloadError> { self.errors }
}
