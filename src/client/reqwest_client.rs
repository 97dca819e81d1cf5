//! Default HTTP client backed by reqwest

use super::traits::HttpClient;
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::types::{Payload, Response};
use async_trait::async_trait;

/// HTTP client built on a shared `reqwest::Client`
///
/// `reqwest::Client` pools connections internally and is cheap to clone, so a
/// single instance serves every concurrent request of a fetch.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    require_success: bool,
}

impl ReqwestClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or the
    /// underlying client cannot be created.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let inner = builder.build().map_err(|e| Error::Config {
            message: format!("Failed to create HTTP client: {}", e),
            key: None,
        })?;

        Ok(Self {
            inner,
            require_success: config.require_success,
        })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(inner: reqwest::Client, require_success: bool) -> Self {
        Self {
            inner,
            require_success,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Response> {
        let parsed = url::Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .inner
            .get(parsed)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if self.require_success && !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let bytes = response.bytes().await.map_err(|e| Error::Http {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
        })?;

        tracing::trace!(url, status = status.as_u16(), bytes = bytes.len(), "GET completed");

        Ok(Response {
            url: final_url,
            status: status.as_u16(),
            body: Payload::from_bytes(&bytes),
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn transport_error(url: &str, e: &reqwest::Error) -> Error {
    let message = if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    };
    Error::Http {
        url: url.to_string(),
        message,
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> ReqwestClient {
        ReqwestClient::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_get_parses_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultado": "dados 1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/data", mock_server.uri());
        let response = client().get(&url).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Payload::Json(json!({"resultado": "dados 1"})));
    }

    #[tokio::test]
    async fn test_get_returns_text_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/plain", mock_server.uri());
        let response = client().get(&url).await.unwrap();

        assert_eq!(response.body, Payload::Text("not json".into()));
    }

    #[tokio::test]
    async fn test_get_sends_configured_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "fetch-tests/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = FetchConfig {
            user_agent: "fetch-tests/1.0".into(),
            ..Default::default()
        };
        let client = ReqwestClient::new(&config).unwrap();
        let response = client.get(&mock_server.uri()).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Payload::Text("ok".into()));
    }

    #[tokio::test]
    async fn test_from_client_respects_require_success_flag() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&mock_server)
            .await;

        let strict = ReqwestClient::from_client(reqwest::Client::new(), true);
        assert!(matches!(
            strict.get(&mock_server.uri()).await,
            Err(Error::Status { status: 404, .. })
        ));

        let lenient = ReqwestClient::from_client(reqwest::Client::new(), false);
        let response = lenient.get(&mock_server.uri()).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body, Payload::Text("gone".into()));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/missing", mock_server.uri());
        match client().get(&url).await {
            Err(Error::Status { url: failed, status }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_allowed_when_configured() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
            .mount(&mock_server)
            .await;

        let config = FetchConfig {
            require_success: false,
            ..Default::default()
        };
        let response = ReqwestClient::new(&config)
            .unwrap()
            .get(&mock_server.uri())
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, Payload::Json(json!({"error": "boom"})));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_without_request() {
        match client().get("not a url").await {
            Err(Error::InvalidUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        // Bind then drop a listener to get a port nothing is listening on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("http://127.0.0.1:{port}/");
        match client().get(&url).await {
            Err(Error::Http { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_http_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let config = FetchConfig {
            timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let result = ReqwestClient::new(&config)
            .unwrap()
            .get(&mock_server.uri())
            .await;

        match result {
            Err(Error::Http { message, .. }) => assert!(message.contains("timed out"), "got: {message}"),
            other => panic!("Expected Http timeout error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = FetchConfig {
            user_agent: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            ReqwestClient::new(&config),
            Err(Error::Config { .. })
        ));
    }
}
