use std::future::Future;

use bytes::Bytes;
use futures_util::StreamExt;

use crate::core::{check_body_size, split_chunk};
use crate::data::{FetchLimits, FetchOutcome};
use crate::effects::http::HttpClient;
use crate::error::FetchError;

/// Receiver of body bytes, handed to [`StreamingFetcher::fetch`] by `&mut`.
///
/// Chunks arrive in network order and never overlap. A sink cannot stop the
/// transfer; one that has given up keeps accepting and discards.
pub trait ChunkSink: Send {
    fn accept(&mut self, chunk: Bytes) -> impl Future<Output = ()> + Send;
}

/// Streams one response body into a [`ChunkSink`] within [`FetchLimits`].
pub struct StreamingFetcher<C: HttpClient> {
    client: C,
    limits: FetchLimits,
}

impl<C: HttpClient> StreamingFetcher<C> {
    pub fn new(client: C, limits: FetchLimits) -> Self { Self { client, limits } }

    /// Fetch `url`, feeding every chunk to `sink` before returning.
    ///
    /// Timeouts and size violations come back as [`FetchOutcome::TransportError`]
    /// just like connection failures.
    pub async fn fetch<S: ChunkSink>(&self, url: &str, sink: &mut S) -> FetchOutcome {
        let timeout = self.limits.request_timeout;
        match tokio::time::timeout(timeout, self.stream_into(url, sink)).await {
            Ok(Ok(received)) => {
                tracing::debug!(url, received, "fetch finished");
                FetchOutcome::Success { received }
            }
            Ok(Err(e)) => {
                tracing::debug!(url, error = %e, "fetch failed");
                FetchOutcome::TransportError(e)
            }
            Err(_) => {
                tracing::debug!(url, ?timeout, "fetch timed out");
                FetchOutcome::TransportError(FetchError::Timeout(timeout))
            }
        }
    }

    async fn stream_into<S: ChunkSink>(&self, url: &str, sink: &mut S) -> Result<u64, FetchError> {
        let max_body_size = self.limits.max_body_size;
        let body = self.client.stream(url).await.map_err(|e| FetchError::transport(&e))?;

        if let Some(announced) = body.content_length {
            check_body_size(announced, max_body_size)?;
        }

        let mut stream = body.stream;
        let mut received = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::transport(&e))?;
            received += chunk.len() as u64;
            check_body_size(received, max_body_size)?;

            for piece in split_chunk(chunk, self.limits.max_buffer_size) {
                sink.accept(piece).await;
            }
        }

        Ok(received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::http::ResponseBody;
    use std::time::Duration;

    #[derive(Debug)]
    struct TestError(String);

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
    }

    impl std::error::Error for TestError {}

    struct TestClient {
        content_length: Option<u64>,
        chunks:         Vec<Result<&'static str, &'static str>>,
        hang:           bool,
    }

    impl TestClient {
        fn serving(chunks: &[&'static str]) -> Self {
            Self {
                content_length: Some(chunks.iter().map(|c| c.len() as u64).sum()),
                chunks:         chunks.iter().map(|c| Ok(*c)).collect(),
                hang:           false,
            }
        }
    }

    impl HttpClient for TestClient {
        type Error = TestError;

        async fn stream(&self, _url: &str) -> Result<ResponseBody<TestError>, TestError> {
            let items: Vec<Result<Bytes, TestError>> = self
                .chunks
                .iter()
                .map(|c| match c {
                    Ok(text) => Ok(Bytes::from_static(text.as_bytes())),
                    Err(msg) => Err(TestError(msg.to_string())),
                })
                .collect();
            let stream = futures_util::stream::iter(items);
            let stream: BoxStreamOf = if self.hang {
                Box::pin(stream.chain(futures_util::stream::pending()))
            } else {
                Box::pin(stream)
            };
            Ok(ResponseBody {
                content_length: self.content_length,
                stream,
            })
        }
    }

    type BoxStreamOf = crate::effects::http::BoxStream<'static, Result<Bytes, TestError>>;

    #[derive(Default)]
    struct RecordingSink(Vec<Bytes>);

    impl ChunkSink for RecordingSink {
        async fn accept(&mut self, chunk: Bytes) { self.0.push(chunk); }
    }

    #[tokio::test]
    async fn test_chunks_arrive_in_order() {
        let fetcher = StreamingFetcher::new(
            TestClient::serving(&["one ", "two ", "three"]),
            FetchLimits::default(),
        );
        let mut sink = RecordingSink::default();

        let outcome = fetcher.fetch("http://test/file", &mut sink).await;

        assert!(outcome.is_success());
        assert!(matches!(outcome, FetchOutcome::Success { received: 13 }));
        assert_eq!(sink.0.concat(), b"one two three");
    }

    #[tokio::test]
    async fn test_large_chunks_are_sliced() {
        let limits = FetchLimits::default().max_buffer_size(4);
        let fetcher = StreamingFetcher::new(TestClient::serving(&["0123456789"]), limits);
        let mut sink = RecordingSink::default();

        fetcher.fetch("http://test/file", &mut sink).await;

        let sizes: Vec<usize> = sink.0.iter().map(Bytes::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[tokio::test]
    async fn test_announced_length_over_limit_sends_nothing() {
        let limits = FetchLimits::default().max_body_size(5);
        let fetcher = StreamingFetcher::new(TestClient::serving(&["0123456789"]), limits);
        let mut sink = RecordingSink::default();

        let outcome = fetcher.fetch("http://test/file", &mut sink).await;

        assert!(matches!(
            outcome,
            FetchOutcome::TransportError(FetchError::BodyTooLarge { limit: 5, size: 10 })
        ));
        assert!(sink.0.is_empty());
    }

    #[tokio::test]
    async fn test_observed_length_over_limit() {
        let mut client = TestClient::serving(&["abc", "def", "ghi"]);
        client.content_length = None;
        let fetcher = StreamingFetcher::new(client, FetchLimits::default().max_body_size(7));
        let mut sink = RecordingSink::default();

        let outcome = fetcher.fetch("http://test/file", &mut sink).await;

        assert!(matches!(
            outcome,
            FetchOutcome::TransportError(FetchError::BodyTooLarge { size: 9, .. })
        ));
        assert_eq!(sink.0.concat(), b"abcdef");
    }

    #[tokio::test]
    async fn test_stream_error_is_a_value() {
        let client = TestClient {
            content_length: None,
            chunks:         vec![Ok("partial"), Err("connection reset by peer")],
            hang:           false,
        };
        let fetcher = StreamingFetcher::new(client, FetchLimits::default());
        let mut sink = RecordingSink::default();

        let outcome = fetcher.fetch("http://test/file", &mut sink).await;

        match outcome {
            FetchOutcome::TransportError(FetchError::Transport(message)) => {
                assert_eq!(message, "connection reset by peer");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(sink.0.concat(), b"partial");
    }

    #[tokio::test]
    async fn test_timeout_spans_the_whole_body() {
        let mut client = TestClient::serving(&["first"]);
        client.hang = true;
        let limits = FetchLimits::default().request_timeout(Duration::from_millis(50));
        let fetcher = StreamingFetcher::new(client, limits);
        let mut sink = RecordingSink::default();

        let outcome = fetcher.fetch("http://test/file", &mut sink).await;

        assert!(!outcome.is_success());
        assert!(matches!(outcome, FetchOutcome::TransportError(FetchError::Timeout(_))));
        assert_eq!(sink.0.concat(), b"first");
    }
}
