//! Concurrent all-or-nothing fetching of URL lists
//!
//! [`ParallelFetcher::fetch`] dispatches one GET per URL at once, waits for
//! every request to finish and then either returns all payloads in input order
//! or a single [`Error::FetchFailed`].

use crate::client::{HttpClient, ReqwestClient};
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::types::Payload;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans a list of URLs out to an [`HttpClient`] and gathers the payloads
///
/// Cloning is cheap; clones share the same client.
#[derive(Debug)]
pub struct ParallelFetcher<C> {
    client: Arc<C>,
}

impl<C> Clone for ParallelFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl ParallelFetcher<ReqwestClient> {
    /// Create a fetcher backed by a reqwest client built from `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        Ok(Self::new(ReqwestClient::new(config)?))
    }
}

impl<C: HttpClient> ParallelFetcher<C> {
    /// Create a fetcher around an existing client
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The client used for every request
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch every URL concurrently and return the payloads in input order
    ///
    /// All requests are dispatched before any is awaited, and the call returns
    /// only once every request has finished. A failed request does not cancel
    /// the others.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `urls` is empty. No request is made.
    /// - [`Error::FetchFailed`] if any request failed. When several failed,
    ///   the one with the lowest input index is reported.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use parallel_fetch::{FetchConfig, ParallelFetcher};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let fetcher = ParallelFetcher::from_config(&FetchConfig::default())?;
    /// let payloads = fetcher
    ///     .fetch(&["https://example.com/a.json", "https://example.com/b.json"])
    ///     .await?;
    /// assert_eq!(payloads.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Payload>> {
        if urls.is_empty() {
            return Err(Error::EmptyInput);
        }

        debug!(
            url_count = urls.len(),
            client = self.client.name(),
            "Dispatching fetches"
        );

        let results = join_all(urls.iter().map(|url| self.client.get(url.as_ref()))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        let mut payloads = Vec::with_capacity(results.len());
        let mut first_error = None;

        for (index, (url, result)) in urls.iter().zip(results).enumerate() {
            let url: &str = url.as_ref();
            match result {
                Ok(response) => payloads.push(response.body),
                Err(e) if first_error.is_none() => first_error = Some((index, e)),
                Err(e) => {
                    debug!(index, url, error = %e, "Additional fetch failure");
                }
            }
        }

        if let Some((index, source)) = first_error {
            let url: String = urls[index].as_ref().to_string();
            warn!(
                failed,
                total = urls.len(),
                index,
                url = %url,
                error = %source,
                "Fetch failed"
            );
            return Err(Error::FetchFailed {
                index,
                url,
                source: Box::new(source),
            });
        }

        debug!(url_count = payloads.len(), "All fetches succeeded");
        Ok(payloads)
    }

    /// Fetch every URL and decode each JSON payload into `T`
    ///
    /// # Errors
    ///
    /// Everything [`fetch`](Self::fetch) returns, plus [`Error::Decode`] for
    /// the first payload that is not JSON of the expected shape. A plain-text
    /// body is not treated as a JSON string, so it fails even for `T = String`.
    pub async fn fetch_as<T, S>(&self, urls: &[S]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        S: AsRef<str>,
    {
        let payloads = self.fetch(urls).await?;

        payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| {
                let url: &str = urls[index].as_ref();
                let decoded = match payload {
                    Payload::Json(value) => serde_json::from_value(value),
                    // Non-JSON bodies only decode if they actually parse as JSON
                    Payload::Text(text) => serde_json::from_str(&text),
                    Payload::Binary(bytes) => serde_json::from_slice(&bytes),
                };
                decoded.map_err(|source| Error::Decode {
                    index,
                    url: url.to_string(),
                    source,
                })
            })
            .collect()
    }
}

/// Fetch every URL with a default reqwest client
///
/// Shorthand for `ParallelFetcher::from_config(&FetchConfig::default())?.fetch(urls)`.
///
/// # Errors
///
/// See [`ParallelFetcher::fetch`].
pub async fn fetch_all<S: AsRef<str>>(urls: &[S]) -> Result<Vec<Payload>> {
    ParallelFetcher::from_config(&FetchConfig::default())?
        .fetch(urls)
        .await
}
