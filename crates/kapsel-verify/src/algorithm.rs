use std::fmt;
use std::str::FromStr;

use digest::DynDigest;

use crate::{Hasher, VerificationError};

/// Hash families a download can be checked against.
///
/// Only algorithms compiled in through cargo features exist as variants, so holding a
/// `HashAlgorithm` proves the algorithm is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashAlgorithm {
    #[cfg(feature = "md5")]
    Md5,
    #[cfg(feature = "sha2")]
    Sha224,
    #[cfg(feature = "sha2")]
    Sha256,
    #[cfg(feature = "sha2")]
    Sha384,
    #[cfg(feature = "sha2")]
    Sha512,
    #[cfg(feature = "sha3")]
    Sha3_256,
    #[cfg(feature = "sha3")]
    Sha3_512,
    #[cfg(feature = "blake3")]
    Blake3,
}

impl HashAlgorithm {
    pub const SUPPORTED: &'static [HashAlgorithm] = &[
        #[cfg(feature = "md5")]
        HashAlgorithm::Md5,
        #[cfg(feature = "sha2")]
        HashAlgorithm::Sha224,
        #[cfg(feature = "sha2")]
        HashAlgorithm::Sha256,
        #[cfg(feature = "sha2")]
        HashAlgorithm::Sha384,
        #[cfg(feature = "sha2")]
        HashAlgorithm::Sha512,
        #[cfg(feature = "sha3")]
        HashAlgorithm::Sha3_256,
        #[cfg(feature = "sha3")]
        HashAlgorithm::Sha3_512,
        #[cfg(feature = "blake3")]
        HashAlgorithm::Blake3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "md5")]
            Self::Md5 => "md5",
            #[cfg(feature = "sha2")]
            Self::Sha224 => "sha224",
            #[cfg(feature = "sha2")]
            Self::Sha256 => "sha256",
            #[cfg(feature = "sha2")]
            Self::Sha384 => "sha384",
            #[cfg(feature = "sha2")]
            Self::Sha512 => "sha512",
            #[cfg(feature = "sha3")]
            Self::Sha3_256 => "sha3_256",
            #[cfg(feature = "sha3")]
            Self::Sha3_512 => "sha3_512",
            #[cfg(feature = "blake3")]
            Self::Blake3 => "blake3",
        }
    }

    /// Fresh incremental hasher for this algorithm.
    pub fn hasher(self) -> AnyHasher {
        let inner = match self {
            #[cfg(feature = "md5")]
            Self::Md5 => Inner::Digest(Box::new(md5::Md5::default())),
            #[cfg(feature = "sha2")]
            Self::Sha224 => Inner::Digest(Box::new(sha2::Sha224::default())),
            #[cfg(feature = "sha2")]
            Self::Sha256 => Inner::Digest(Box::new(sha2::Sha256::default())),
            #[cfg(feature = "sha2")]
            Self::Sha384 => Inner::Digest(Box::new(sha2::Sha384::default())),
            #[cfg(feature = "sha2")]
            Self::Sha512 => Inner::Digest(Box::new(sha2::Sha512::default())),
            #[cfg(feature = "sha3")]
            Self::Sha3_256 => Inner::Digest(Box::new(sha3::Sha3_256::default())),
            #[cfg(feature = "sha3")]
            Self::Sha3_512 => Inner::Digest(Box::new(sha3::Sha3_512::default())),
            #[cfg(feature = "blake3")]
            Self::Blake3 => Inner::Blake3(crate::Blake3Hasher::new()),
        };
        AnyHasher(inner)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for HashAlgorithm {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|alg| squash(alg.name()) == wanted)
            .ok_or_else(|| VerificationError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Lowercase `name` without separators, so `SHA-256`, `sha_256` and `sha256` compare equal.
fn squash(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Type-erased [`Hasher`] produced by [`HashAlgorithm::hasher`].
pub struct AnyHasher(Inner);

enum Inner {
    Digest(Box<dyn DynDigest + Send>),
    #[cfg(feature = "blake3")]
    Blake3(crate::Blake3Hasher),
}

impl Hasher for AnyHasher {
    fn update(&mut self, data: &[u8]) {
        match &mut self.0 {
            Inner::Digest(d) => d.update(data),
            #[cfg(feature = "blake3")]
            Inner::Blake3(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self.0 {
            Inner::Digest(d) => d.finalize().into_vec(),
            #[cfg(feature = "blake3")]
            Inner::Blake3(h) => h.finalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sha2")]
    #[test]
    fn test_parse_names() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("SHA512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert_eq!(" sha224 ".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha224);
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha_384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
    }

    #[cfg(feature = "sha3")]
    #[test]
    fn test_parse_dashed_name() {
        assert_eq!("sha3-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!("sha3_256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!("SHA3512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_512);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "crc32".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, VerificationError::UnsupportedAlgorithm(ref name) if name == "crc32"));
    }

    #[test]
    fn test_names_round_trip() {
        for alg in HashAlgorithm::SUPPORTED {
            assert_eq!(alg.to_string().parse::<HashAlgorithm>().unwrap(), *alg);
        }
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_any_hasher_matches_direct() {
        let mut any = HashAlgorithm::Sha256.hasher();
        any.update(b"hello world");
        assert_eq!(any.finalize(), crate::Sha256Hasher::digest(b"hello world"));
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_digest_lengths() {
        for (alg, len) in [
            (HashAlgorithm::Sha224, 28),
            (HashAlgorithm::Sha256, 32),
            (HashAlgorithm::Sha384, 48),
            (HashAlgorithm::Sha512, 64),
        ] {
            assert_eq!(alg.hasher().finalize().len(), len, "{alg}");
        }
    }
}
