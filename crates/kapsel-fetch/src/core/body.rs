use bytes::Bytes;

use crate::error::FetchError;

/// Fail once `size` bytes, announced or received so far, exceed `limit`.
///
/// # Examples
///
/// ```
/// use kapsel_fetch::core::check_body_size;
///
/// assert!(check_body_size(10, 10).is_ok());
/// assert!(check_body_size(11, 10).is_err());
/// ```
pub fn check_body_size(size: u64, limit: u64) -> Result<(), FetchError> {
    if size > limit {
        Err(FetchError::BodyTooLarge { limit, size })
    } else {
        Ok(())
    }
}

/// Split `chunk` into consecutive slices of at most `max` bytes, without copying.
///
/// An empty chunk yields nothing.
pub fn split_chunk(mut chunk: Bytes, max: usize) -> impl Iterator<Item = Bytes> {
    let max = max.max(1);
    std::iter::from_fn(move || {
        if chunk.is_empty() {
            return None;
        }
        let n = chunk.len().min(max);
        Some(chunk.split_to(n))
    })
}
