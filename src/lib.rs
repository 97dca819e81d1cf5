//! # parallel-fetch
//!
//! Fetch a list of URLs concurrently and get back every payload, in input
//! order, or a single error.
//!
//! ## Behavior
//!
//! - **Unbounded fan-out** - one GET per URL, all dispatched at once
//! - **Full-barrier join** - the call returns only after every request finished
//! - **All-or-nothing** - any failure fails the whole call; no partial results
//! - **Deterministic errors** - with several failures, the lowest input index wins
//!
//! ## Quick Start
//!
//! ```no_run
//! use parallel_fetch::fetch_all;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let payloads = fetch_all(&[
//!         "https://example.com/one.json",
//!         "https://example.com/two.json",
//!     ])
//!     .await?;
//!
//!     for payload in payloads {
//!         println!("{:?}", payload);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Custom clients plug in through [`client::HttpClient`]:
//!
//! ```no_run
//! use parallel_fetch::{FetchConfig, ParallelFetcher};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FetchConfig {
//!     timeout: Some(Duration::from_secs(5)),
//!     ..Default::default()
//! };
//! let fetcher = ParallelFetcher::from_config(&config)?;
//! let payloads = fetcher.fetch(&["https://example.com/data.json"]).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP client capability and the default reqwest implementation
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Concurrent fetching
pub mod fetcher;
/// Response and payload types
pub mod types;

// Re-export commonly used types
pub use client::{HttpClient, ReqwestClient};
pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetcher::{ParallelFetcher, fetch_all};
pub use types::{Payload, Response};
