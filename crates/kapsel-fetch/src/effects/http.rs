use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// An open response whose body has not been read yet.
pub struct ResponseBody<E> {
    /// `Content-Length` as announced by the server, if any.
    pub content_length: Option<u64>,
    /// Body bytes in arrival order.
    pub stream:         BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations handle their own redirect following, authentication and error
/// mapping. A response with a non-success status must be reported as an error
/// rather than streamed.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Send a GET for `url` and hand back the body as a stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (DNS failure, connection error,
    /// HTTP error status, etc.).
    fn stream(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<ResponseBody<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Client that keeps at most one idle connection per host between requests.
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder()
                .pool_max_idle_per_host(1)
                .user_agent(concat!("kapsel/", env!("CARGO_PKG_VERSION")))
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn stream(&self, url: &str) -> Result<ResponseBody<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?.error_for_status()?;

            Ok(ResponseBody {
                content_length: response.content_length(),
                stream:         Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
