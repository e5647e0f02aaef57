//! I/O for single-file downloads.
//!
//! The transport sits behind [`HttpClient`]; [`StreamingFetcher`] drives it and feeds
//! a [`ChunkSink`]; [`Downloader`] owns the staging file and decides whether the
//! result is committed or discarded.

mod downloader;
mod fetcher;
mod http;

pub use downloader::Downloader;
pub use fetcher::{ChunkSink, StreamingFetcher};
pub use http::{BoxStream, HttpClient, ResponseBody};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
