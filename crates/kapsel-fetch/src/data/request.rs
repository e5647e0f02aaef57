use std::path::{Path, PathBuf};

use kapsel_verify::{HashAlgorithm, VerificationError};

/// One file to fetch: where from, where to, and optionally how to hash it.
///
/// # Examples
///
/// ```
/// use kapsel_fetch::DownloadRequest;
///
/// let request = DownloadRequest::new("https://example.com/data.csv", "downloads/data.csv")
///     .with_hash_name("sha256")
///     .unwrap();
/// assert_eq!(request.hash_algorithm().unwrap().name(), "sha256");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url:            String,
    destination:    PathBuf,
    hash_algorithm: Option<HashAlgorithm>,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            url:            url.into(),
            destination:    destination.into(),
            hash_algorithm: None,
        }
    }

    #[must_use]
    pub fn with_hash(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = Some(algorithm);
        self
    }

    /// Like [`with_hash`](Self::with_hash), parsing an algorithm name such as `"sha256"`.
    pub fn with_hash_name(self, name: &str) -> Result<Self, VerificationError> {
        Ok(self.with_hash(name.parse()?))
    }

    pub fn url(&self) -> &str { &self.url }

    pub fn destination(&self) -> &Path { &self.destination }

    pub fn hash_algorithm(&self) -> Option<HashAlgorithm> { self.hash_algorithm }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_hash() {
        let request = DownloadRequest::new("http://localhost/a", "out/a");
        assert_eq!(request.url(), "http://localhost/a");
        assert_eq!(request.destination(), Path::new("out/a"));
        assert_eq!(request.hash_algorithm(), None);
    }

    #[test]
    fn test_unsupported_hash_name() {
        let err = DownloadRequest::new("http://localhost/a", "a")
            .with_hash_name("whirlpool")
            .unwrap_err();
        assert!(matches!(err, VerificationError::UnsupportedAlgorithm(_)));
    }
}
