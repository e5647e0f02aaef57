//! Content verification primitives for downloaded files.
//!
//! Digests are computed incrementally while bytes stream through, so a download is
//! hashed in the same pass that writes it to disk.
//!
//! # Key Features
//!
//! - **Named algorithms**: [`HashAlgorithm`] parses the names a project manifest uses
//! - **Incremental**: [`StreamHasher`] is fed chunk by chunk and finalizes once
//! - **Extensible**: minimal [`Hasher`] trait allows custom implementations
//!
//! # Example
//!
//! ```
//! use kapsel_verify::{HashAlgorithm, StreamHasher};
//!
//! let mut hasher = StreamHasher::new(Some("sha256".parse::<HashAlgorithm>().unwrap()));
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(
//!     hasher.finalize().unwrap(),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```

pub use self::algorithm::{AnyHasher, HashAlgorithm};
pub use self::error::{Result, VerificationError};
pub use self::file::{digest_file, verify_file};
pub use self::hasher::{DigestHasher, Hasher};
pub use self::reader::VerifiedReader;
pub use self::stream::StreamHasher;

#[cfg(feature = "sha2")]
pub use self::hasher::Sha256Hasher;

#[cfg(feature = "md5")]
pub use self::hasher::Md5Hasher;

#[cfg(feature = "blake3")]
pub use self::hasher::Blake3Hasher;

mod algorithm;
mod error;
mod file;
mod hasher;
mod reader;
mod stream;
