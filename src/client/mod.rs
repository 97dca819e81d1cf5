//! HTTP client capability
//!
//! The fetcher never talks to the network directly. It goes through the
//! [`HttpClient`] trait, so production code uses [`ReqwestClient`] while tests
//! inject their own implementation.
//!
//! ## Usage
//!
//! ```no_run
//! use parallel_fetch::client::{HttpClient, ReqwestClient};
//! use parallel_fetch::FetchConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReqwestClient::new(&FetchConfig::default())?;
//!     let response = client.get("https://example.com/data.json").await?;
//!     println!("{} -> {:?}", response.status, response.body);
//!     Ok(())
//! }
//! ```

mod reqwest_client;
mod traits;

pub use reqwest_client::ReqwestClient;
pub use traits::HttpClient;
