//! Single-file HTTP downloads with streaming verification and crash-resistant placement.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Requests, limits and results
//! - [`core`] - Pure checks on body size and chunking plus the per-download [`ErrorSink`]
//! - effects - The HTTP seam, the streaming fetcher and the [`Downloader`]
//!
//! # Guarantees
//!
//! - **Staged**: bytes go to `<destination>.part` and only replace the destination
//!   once the whole body has arrived
//! - **Single-Pass**: the digest is computed while streaming, never by re-reading
//! - **Clean**: the staging file is removed on every exit path
//! - **No Panics for I/O**: every failure ends up in [`DownloadResult::errors`]
//!
//! # Example
//!
//! ```no_run
//! use kapsel_fetch::{DownloadRequest, Downloader, ReqwestClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new(ReqwestClient::new()?);
//! let request = DownloadRequest::new("https://example.com/data.csv", "downloads/data.csv")
//!     .with_hash_name("sha256")?;
//!
//! let result = downloader.download(&request).await;
//! if result.succeeded() {
//!     println!("sha256 {}", result.hash().unwrap_or_default());
//! } else {
//!     for message in result.messages() {
//!         eprintln!("{message}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
mod effects;
mod error;

pub use crate::core::ErrorSink;
pub use data::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_BUFFER_SIZE, DEFAULT_REQUEST_TIMEOUT, DownloadRequest, DownloadResult,
    FetchLimits, FetchOutcome,
};
pub use effects::{BoxStream, ChunkSink, Downloader, HttpClient, ResponseBody, StreamingFetcher};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{DownloadError, FetchError};
pub use kapsel_verify::HashAlgorithm;
