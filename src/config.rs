//! Configuration types for parallel-fetch

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the default reqwest-backed HTTP client
///
/// Only the client is configurable. The fan-out itself has no knobs: every URL
/// is dispatched at once and the call waits for all of them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total per-request timeout (default: 30 seconds, None = no timeout)
    #[serde(default = "default_timeout", with = "optional_duration_serde")]
    pub timeout: Option<Duration>,

    /// Connection establishment timeout (default: 10 seconds, None = no timeout)
    #[serde(default = "default_connect_timeout", with = "optional_duration_serde")]
    pub connect_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Treat non-2xx responses as failures (default: true)
    ///
    /// When false, the body of any response is returned as its payload.
    #[serde(default = "default_true")]
    pub require_success: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
            require_success: true,
        }
    }
}

impl FetchConfig {
    /// Check the configuration for values the HTTP client cannot work with
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero timeout or an empty user agent.
    pub fn validate(&self) -> Result<()> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::Config {
                message: "timeout must be greater than zero".into(),
                key: Some("timeout".into()),
            });
        }
        if self.connect_timeout == Some(Duration::ZERO) {
            return Err(Error::Config {
                message: "connect_timeout must be greater than zero".into(),
                key: Some("connect_timeout".into()),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Config {
                message: "user_agent must not be empty".into(),
                key: Some("user_agent".into()),
            });
        }
        Ok(())
    }
}

fn default_timeout() -> Option<Duration> {
    Some(Duration::from_secs(30))
}

fn default_connect_timeout() -> Option<Duration> {
    Some(Duration::from_secs(10))
}

fn default_user_agent() -> String {
    concat!("parallel-fetch/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_true() -> bool {
    true
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(10)));
        assert!(config.user_agent.starts_with("parallel-fetch/"));
        assert!(config.require_success);
        config.validate().unwrap();
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config: FetchConfig = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.require_success);
    }

    #[test]
    fn durations_serialize_as_seconds() {
        let config = FetchConfig {
            timeout: Some(Duration::from_secs(5)),
            connect_timeout: None,
            user_agent: "tester".into(),
            require_success: false,
        };

        let json = serde_json::to_value(&config).expect("serialize failed");
        assert_eq!(json["timeout"], 5);
        assert!(json["connect_timeout"].is_null());

        let back: FetchConfig = serde_json::from_value(json).expect("deserialize failed");
        assert_eq!(back.timeout, Some(Duration::from_secs(5)));
        assert_eq!(back.connect_timeout, None);
        assert!(!back.require_success);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = FetchConfig {
            timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        match config.validate() {
            Err(Error::Config { key, .. }) => assert_eq!(key.as_deref(), Some("timeout")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_user_agent_is_rejected() {
        let config = FetchConfig {
            user_agent: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }
}
