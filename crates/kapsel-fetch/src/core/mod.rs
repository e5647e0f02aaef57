//! Pure bookkeeping for single-file downloads.
//!
//! Nothing in this module touches the network or the filesystem.

mod body;
mod sink;

pub use body::{check_body_size, split_chunk};
pub use sink::ErrorSink;
