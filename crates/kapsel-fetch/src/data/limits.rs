use std::time::Duration;

/// Default ceiling on a response body: 100 GiB.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 100 * 1024 * 1024 * 1024;

/// Default wall-clock budget for a whole request. Long, because bodies can be huge.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Default largest slice handed to a chunk sink at once: 1 MiB.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// Size and time ceilings enforced while streaming one response.
///
/// # Examples
///
/// ```
/// use kapsel_fetch::FetchLimits;
/// use std::time::Duration;
///
/// let limits = FetchLimits::default()
///     .max_body_size(512 * 1024 * 1024)
///     .request_timeout(Duration::from_secs(30));
/// assert_eq!(limits.max_body_size, 512 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    /// Largest body accepted, whether announced by `Content-Length` or observed while
    /// streaming. Exceeding it ends the transfer with an error.
    ///
    /// Default: 100 GiB
    pub max_body_size: u64,

    /// Budget for the entire request: connecting, headers and the full body.
    /// Expiry is reported like any other transport failure.
    ///
    /// Default: 10 minutes
    pub request_timeout: Duration,

    /// Transport chunks larger than this are handed to the sink in slices of at
    /// most this many bytes.
    ///
    /// Default: 1 MiB
    pub max_buffer_size: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_body_size:   DEFAULT_MAX_BODY_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}

impl FetchLimits {
    #[must_use]
    pub fn max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Set the slice size; zero is treated as one byte.
    #[must_use]
    pub fn max_buffer_size(mut self, max_buffer_size: usize) -> Self {
        self.max_buffer_size = max_buffer_size.max(1);
        self
    }
}
