use crate::{AnyHasher, HashAlgorithm, Hasher};

/// Optional incremental hasher fed chunk by chunk as a download arrives.
///
/// Without an algorithm every call is a no-op and [`finalize`](Self::finalize)
/// yields `None`. Finalizing consumes the hasher, so a digest is produced at most once.
pub struct StreamHasher {
    inner: Option<(HashAlgorithm, AnyHasher)>,
}

impl StreamHasher {
    pub fn new(algorithm: Option<HashAlgorithm>) -> Self {
        Self {
            inner: algorithm.map(|alg| (alg, alg.hasher())),
        }
    }

    pub fn disabled() -> Self { Self { inner: None } }

    pub fn algorithm(&self) -> Option<HashAlgorithm> { self.inner.as_ref().map(|(alg, _)| *alg) }

    pub fn update(&mut self, chunk: &[u8]) {
        if let Some((_, hasher)) = &mut self.inner {
            hasher.update(chunk);
        }
    }

    /// Lowercase hex digest of everything fed so far.
    pub fn finalize(self) -> Option<String> {
        self.inner.map(|(_, hasher)| hex::encode(hasher.finalize()))
    }
}

impl Default for StreamHasher {
    fn default() -> Self { Self::disabled() }
}
