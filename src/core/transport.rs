//! Outbound HTTP behind a trait.

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::fetch_text_uncached;

/// Issues a GET and yields the response body.
///
/// Implementations must treat transport failures and non-2xx statuses as
/// errors. The returned future is polled on a single-threaded executor and
/// need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).get_text(url).await
    }
}

/// Browser Fetch API, bypassing the HTTP cache, bounded by a timeout.
#[derive(Debug, Clone, Copy)]
pub struct BrowserTransport {
    timeout_ms: i32,
}

impl BrowserTransport {
    pub fn new(timeout_ms: i32) -> Self {
        Self { timeout_ms }
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT_MS)
    }
}

impl Transport for BrowserTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        fetch_text_uncached(url, self.timeout_ms).await
    }
}
