//! HTTP client for pulling forecast markup and static resources.
//!
//! All requests in a run go through one [`Fetcher`], which wraps a shared
//! [`reqwest::Client`] configured with a hard timeout so a stalled source
//! cannot hang the whole update. Two quirks of the upstream sources live
//! here:
//!
//! - An empty URL is a valid "source absent" marker (Bali sites have no
//!   weather page); fetching it yields an empty body without any request.
//! - The CWB pages declare no charset and windguru's detection is
//!   unreliable, so bodies are always decoded as UTF-8, lossily.

use crate::errors::FetchError;
use reqwest::header::COOKIE;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Hard cap on any single HTTP request, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for all fetch tasks in a run.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a fetcher with the pipeline-wide request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Fetches a source page and returns its body decoded as UTF-8.
    ///
    /// # Arguments
    ///
    /// * `url` - Source page URL; an empty string short-circuits to an
    ///   empty body without issuing a request.
    /// * `cookie` - Optional `Cookie` header value (windguru needs one to
    ///   serve the expected page shape).
    ///
    /// # Returns
    ///
    /// The response body, or a [`FetchError`] if the request failed or the
    /// server answered with a non-success status.
    #[instrument(level = "debug", skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str, cookie: Option<&str>) -> Result<String, FetchError> {
        if url.is_empty() {
            return Ok(String::new());
        }

        let mut request = self.client.get(url);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Force UTF-8 regardless of what the response claims.
        let body = response.bytes().await?;
        let text = String::from_utf8_lossy(&body).into_owned();
        debug!(bytes = text.len(), "Fetched source page");
        Ok(text)
    }

    /// Downloads a binary resource to `path`, creating parent directories
    /// as needed.
    #[instrument(level = "debug", skip_all, fields(url = %url, path = %path.display()))]
    pub async fn download(&self, url: &str, path: &Path) -> Result<(), FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, &body).await?;
        debug!(bytes = body.len(), "Downloaded resource");
        Ok(())
    }
}
