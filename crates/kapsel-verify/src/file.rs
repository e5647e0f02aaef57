use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::{HashAlgorithm, Result, VerificationError, VerifiedReader};

/// Lowercase hex digest of the file at `path`.
pub fn digest_file(path: impl AsRef<Path>, algorithm: HashAlgorithm) -> Result<String> {
    let file = File::open(path.as_ref())?;
    let mut reader = VerifiedReader::new(BufReader::new(file), algorithm.hasher());
    io::copy(&mut reader, &mut io::sink())?;
    Ok(hex::encode(reader.digest()))
}

/// Check a file against a previously recorded hex digest.
pub fn verify_file(path: impl AsRef<Path>, algorithm: HashAlgorithm, expected: &str) -> Result<()> {
    let actual = digest_file(path, algorithm)?;
    let expected = expected.trim().to_ascii_lowercase();
    if actual == expected {
        Ok(())
    } else {
        Err(VerificationError::Mismatch { expected, actual })
    }
}
