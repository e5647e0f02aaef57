//! Immutable data types for single-file downloads.
//!
//! Requests, limits and results are plain values passed between the fetcher and the
//! orchestrator; nothing here performs I/O.

pub mod limits;
pub mod outcome;
pub mod request;

pub use limits::{DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_BUFFER_SIZE, DEFAULT_REQUEST_TIMEOUT, FetchLimits};
pub use outcome::{DownloadResult, FetchOutcome};
pub use request::DownloadRequest;
