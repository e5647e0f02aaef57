use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use kapsel_fetch::{DownloadRequest, Downloader, FetchLimits, ReqwestClient};

use super::app::DownloadArg;

impl DownloadArg {
    fn limits(&self) -> FetchLimits {
        let mut limits = FetchLimits::default();
        if let Some(secs) = self.timeout {
            limits = limits.request_timeout(Duration::from_secs(secs));
        }
        if let Some(bytes) = self.max_body_size {
            limits = limits.max_body_size(bytes);
        }
        limits
    }

    fn request(&self) -> DownloadRequest {
        let request = DownloadRequest::new(&self.url, &self.dest);
        match self.hash {
            Some(algorithm) => request.with_hash(algorithm),
            None => request,
        }
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let client = ReqwestClient::new().context("could not build the HTTP client")?;
        let downloader = Downloader::with_limits(client, self.limits());

        let result = downloader.download(&self.request()).await;
        if !result.succeeded() {
            for message in result.messages() {
                eprintln!("{message}");
            }
            return Ok(ExitCode::FAILURE);
        }

        match (self.hash, result.hash()) {
            (Some(algorithm), Some(hash)) => println!("{algorithm}  {hash}  {}", self.dest.display()),
            _ => println!("{}", self.dest.display()),
        }
        Ok(ExitCode::SUCCESS)
    }
}
