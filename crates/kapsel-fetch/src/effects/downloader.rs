use std::path::{Path, PathBuf};

use bytes::Bytes;
use kapsel_fs::{FileOps, StagingFile, StdFileOps, ensure_dir, parent_dir};
use kapsel_verify::StreamHasher;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::core::ErrorSink;
use crate::data::{DownloadRequest, DownloadResult, FetchLimits, FetchOutcome};
use crate::effects::fetcher::{ChunkSink, StreamingFetcher};
use crate::effects::http::HttpClient;
use crate::error::DownloadError;

/// Downloads single files through a staging file and commits them with
/// [`kapsel_fs::rename_over_existing`].
///
/// Every call goes through the same steps: prepare the parent directory, open
/// `<destination>.part`, stream the body into it while hashing, close it, and
/// replace the destination. Any failure discards the staging file and leaves the
/// destination as it was. Errors are collected into the [`DownloadResult`]; this
/// type never returns `Err`.
///
/// A call holds at most one request open, and [`download_all`](Self::download_all)
/// only starts the next request once the previous one has been committed or
/// discarded. Two downloads must not target the same destination at the same time.
pub struct Downloader<C: HttpClient, F: FileOps = StdFileOps> {
    fetcher:  StreamingFetcher<C>,
    file_ops: F,
}

impl<C: HttpClient> Downloader<C> {
    pub fn new(client: C) -> Self { Self::with_limits(client, FetchLimits::default()) }

    pub fn with_limits(client: C, limits: FetchLimits) -> Self {
        Self {
            fetcher:  StreamingFetcher::new(client, limits),
            file_ops: StdFileOps,
        }
    }
}

impl<C: HttpClient, F: FileOps> Downloader<C, F> {
    /// Swap the filesystem calls used for the final replace.
    pub fn with_file_ops<G: FileOps>(self, file_ops: G) -> Downloader<C, G> {
        Downloader {
            fetcher: self.fetcher,
            file_ops,
        }
    }

    pub async fn download(&self, request: &DownloadRequest) -> DownloadResult {
        let destination = request.destination();
        let mut errors = ErrorSink::default();

        let parent = parent_dir(destination);
        if let Err(source) = ensure_dir(parent) {
            errors.record(DownloadError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            });
            return discard(request, errors);
        }
        tracing::debug!(path = %parent.display(), "destination directory ready");

        // Declared before the sink so the file handle is gone when the guard drops.
        let staging = StagingFile::for_target(destination);
        let file = match File::create(staging.path()).await {
            Ok(file) => file,
            Err(source) => {
                errors.record(DownloadError::StagingOpen {
                    path: staging.path().to_path_buf(),
                    source,
                });
                return discard(request, errors);
            }
        };
        tracing::debug!(path = %staging.path().display(), "staging file opened");

        let hasher = StreamHasher::new(request.hash_algorithm());
        let mut sink = StagingSink::new(staging.path(), file, hasher, errors);

        if let FetchOutcome::TransportError(source) = self.fetcher.fetch(request.url(), &mut sink).await {
            sink.errors.record(DownloadError::Transport {
                destination: destination.to_path_buf(),
                source,
            });
        }

        let Staged {
            hasher,
            mut errors,
            written,
        } = sink.close().await;

        if errors.is_empty()
            && let Err(source) = staging.promote_with(&self.file_ops)
        {
            errors.record(DownloadError::replace(
                staging.path().to_path_buf(),
                destination.to_path_buf(),
                source,
            ));
        }
        drop(staging);

        if !errors.is_empty() {
            return discard(request, errors);
        }

        let hash = hasher.finalize();
        tracing::info!(
            url = request.url(),
            destination = %destination.display(),
            bytes = written,
            hash = hash.as_deref(),
            "download committed"
        );
        DownloadResult::committed(hash, written)
    }

    /// Run `requests` one after another, returning one result per request in order.
    pub async fn download_all<'a>(
        &self,
        requests: impl IntoIterator<Item = &'a DownloadRequest>,
    ) -> Vec<DownloadResult> {
        let mut results = Vec::new();
        for request in requests {
            results.push(self.download(request).await);
        }
        results
    }
}

fn discard(request: &DownloadRequest, errors: ErrorSink) -> DownloadResult {
    for error in errors.iter() {
        if error.is_destructive() {
            tracing::error!(error = %error, "destination needs manual recovery");
        }
    }
    tracing::warn!(
        url = request.url(),
        destination = %request.destination().display(),
        errors = errors.len(),
        "download discarded"
    );
    DownloadResult::discarded(errors.into_vec())
}

/// Per-download state the fetcher writes into: staging file, hasher and errors.
///
/// Once an error is recorded, later chunks are drained and dropped so the
/// transport can finish its response normally.
struct StagingSink {
    path:      PathBuf,
    file:      File,
    hasher:    StreamHasher,
    errors:    ErrorSink,
    written:   u64,
    discarded: u64,
}

struct Staged {
    hasher:  StreamHasher,
    errors:  ErrorSink,
    written: u64,
}

impl StagingSink {
    fn new(path: &Path, file: File, hasher: StreamHasher, errors: ErrorSink) -> Self {
        Self {
            path: path.to_path_buf(),
            file,
            hasher,
            errors,
            written: 0,
            discarded: 0,
        }
    }

    /// Flush and close the staging file. Flushing is skipped once an error is on
    /// record, since those bytes will be discarded anyway.
    async fn close(self) -> Staged {
        let Self {
            path,
            mut file,
            hasher,
            mut errors,
            written,
            discarded,
        } = self;

        if errors.is_empty()
            && let Err(source) = flush(&mut file).await
        {
            errors.record(DownloadError::StagingWrite { path, source });
        }
        if discarded > 0 {
            tracing::debug!(discarded, "dropped bytes received after the first error");
        }
        drop(file.into_std().await);

        Staged {
            hasher,
            errors,
            written,
        }
    }
}

async fn flush(file: &mut File) -> std::io::Result<()> {
    file.flush().await?;
    file.sync_all().await
}

impl ChunkSink for StagingSink {
    async fn accept(&mut self, chunk: Bytes) {
        if !self.errors.is_empty() {
            self.discarded += chunk.len() as u64;
            return;
        }

        self.hasher.update(&chunk);
        match self.file.write_all(&chunk).await {
            Ok(()) => self.written += chunk.len() as u64,
            Err(source) => self.errors.record(DownloadError::StagingWrite {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
