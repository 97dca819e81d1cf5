//! Trait for the HTTP GET capability

use crate::types::Response;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for performing a single HTTP GET
///
/// Implementations must be safe to call from many concurrent futures at once;
/// the fetcher issues every request of a call against the same instance.
///
/// # Examples
///
/// ```no_run
/// use parallel_fetch::client::{HttpClient, ReqwestClient};
/// use parallel_fetch::FetchConfig;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new(&FetchConfig::default())?;
/// let response = client.get("https://example.com/").await?;
/// assert!(response.status < 300);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and extract its body
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL cannot be parsed
    /// - The request fails at the transport level (connect, timeout, body read)
    /// - The server answers with a status the implementation treats as failure
    async fn get(&self, url: &str) -> crate::Result<Response>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn get(&self, url: &str) -> crate::Result<Response> {
        (**self).get(url).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
