use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use kapsel_verify::HashAlgorithm;

#[derive(Clone, Debug, Parser)]
#[command(name = "kapsel", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Log more (-v for debug, -vv for trace); ignored when RUST_LOG is set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "dl", name = "download", about = "Download a URL into place")]
    Download(DownloadArg),
    #[command(alias = "v", name = "verify", about = "Check a file against a recorded digest")]
    Verify(VerifyArg),
}

#[derive(Clone, Debug, Args)]
pub struct DownloadArg {
    pub url: String,

    /// File to create or replace; missing parent directories are created
    pub dest: PathBuf,

    /// Digest to compute while downloading (md5, sha256, ...)
    #[arg(long)]
    pub hash: Option<HashAlgorithm>,

    /// Seconds allowed for the whole request, body included
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "BYTES")]
    pub max_body_size: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct VerifyArg {
    pub file: PathBuf,

    #[arg(long)]
    pub hash: HashAlgorithm,

    /// Expected digest in hex
    #[arg(long, value_name = "HEX")]
    pub expected: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_download() {
        let app = App::try_parse_from([
            "kapsel", "-vv", "download", "https://example.com/a.csv", "out/a.csv", "--hash", "SHA-256", "--timeout", "30",
        ])
        .unwrap();

        assert_eq!(app.verbose, 2);
        let Commands::Download(arg) = app.cmd else {
            panic!("expected download");
        };
        assert_eq!(arg.hash, Some(HashAlgorithm::Sha256));
        assert_eq!(arg.timeout, Some(30));
        assert_eq!(arg.max_body_size, None);
        assert_eq!(arg.dest, PathBuf::from("out/a.csv"));
    }

    #[test]
    fn test_unknown_hash_is_rejected() {
        let err = App::try_parse_from(["kapsel", "download", "https://example.com/a", "a", "--hash", "crc32"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_verify_requires_expected() {
        assert!(App::try_parse_from(["kapsel", "verify", "a.csv", "--hash", "md5"]).is_err());
        assert!(App::try_parse_from(["kapsel", "v", "a.csv", "--hash", "md5", "--expected", "00"]).is_ok());
    }
}
