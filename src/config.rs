//! Client configuration with sensible defaults and a pure options merge.
//!
//! [`ClientConfig`] holds the resolved, immutable settings for a
//! [`crate::SearchClient`]. Callers supply a [`ClientOptions`] with only the
//! fields they want to override; unset fields inherit the documented defaults.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// Resolved configuration for a search client.
///
/// Use [`Default::default()`] for the stock Google endpoint, or merge caller
/// overrides with [`ClientConfig::merge`]. Immutable once the client is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the search engine.
    pub host: String,
    /// Path of the search endpoint under `host`.
    pub path: String,
    /// Default result limit used when `search` is called without one.
    pub limit: usize,
    /// Whether outbound requests are routed through a proxy.
    pub proxied: bool,
    /// Proxy URL; required when `proxied` is true.
    pub proxy: Option<String>,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

/// Caller-supplied overrides for [`ClientConfig`].
///
/// Every field is optional; [`ClientConfig::merge`] fills the gaps from
/// defaults. Unknown settings simply have no field here to set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientOptions {
    pub host: Option<String>,
    pub path: Option<String>,
    pub limit: Option<usize>,
    pub proxied: Option<bool>,
    pub proxy: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "https://google.com".into(),
            path: "/search".into(),
            limit: 10,
            proxied: false,
            proxy: None,
            timeout_seconds: 8,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Merge caller overrides over the defaults.
    ///
    /// Pure function: every `Some` field in `options` replaces the default,
    /// every `None` field inherits it.
    pub fn merge(options: ClientOptions) -> Self {
        let defaults = Self::default();
        Self {
            host: options.host.unwrap_or(defaults.host),
            path: options.path.unwrap_or(defaults.path),
            limit: options.limit.unwrap_or(defaults.limit),
            proxied: options.proxied.unwrap_or(defaults.proxied),
            proxy: options.proxy.or(defaults.proxy),
            timeout_seconds: options.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            user_agent: options.user_agent.or(defaults.user_agent),
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `proxied` requires a non-empty `proxy` URL
    /// - `timeout_seconds` must be greater than 0
    /// - `host` must not be empty
    ///
    /// The proxy URL itself is not parsed here; a malformed one surfaces as a
    /// transport error when the first request is issued.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.host.is_empty() {
            return Err(SearchError::Config("host must not be empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.proxied && self.proxy.as_deref().map_or(true, str::is_empty) {
            return Err(SearchError::Config(
                "proxied requires a non-empty proxy URL".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_google() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "https://google.com");
        assert_eq!(config.path, "/search");
        assert_eq!(config.limit, 10);
        assert!(!config.proxied);
        assert!(config.proxy.is_none());
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn merge_empty_options_yields_defaults() {
        let config = ClientConfig::merge(ClientOptions::default());
        assert_eq!(config.host, "https://google.com");
        assert_eq!(config.limit, 10);
    }

    #[test]
    fn merge_overrides_only_supplied_fields() {
        let config = ClientConfig::merge(ClientOptions {
            host: Some("https://search.example".into()),
            limit: Some(30),
            ..Default::default()
        });
        assert_eq!(config.host, "https://search.example");
        assert_eq!(config.limit, 30);
        assert_eq!(config.path, "/search");
        assert!(!config.proxied);
    }

    #[test]
    fn merge_proxy_fields() {
        let config = ClientConfig::merge(ClientOptions {
            proxied: Some(true),
            proxy: Some("http://proxy.example:8080".into()),
            ..Default::default()
        });
        assert!(config.proxied);
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.example:8080"));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_host_rejected() {
        let config = ClientConfig {
            host: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ClientConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn proxied_without_proxy_rejected() {
        let config = ClientConfig {
            proxied: true,
            proxy: None,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("proxy"));
    }

    #[test]
    fn proxied_with_empty_proxy_rejected() {
        let config = ClientConfig {
            proxied: true,
            proxy: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn proxied_with_proxy_valid() {
        let config = ClientConfig {
            proxied: true,
            proxy: Some("http://proxy.example:8080".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unproxied_ignores_proxy_url() {
        let config = ClientConfig {
            proxied: false,
            proxy: Some("http://proxy.example:8080".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_valid() {
        // A zero limit means "issue no page requests", not a config error.
        let config = ClientConfig {
            limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_serde_round_trip() {
        let config = ClientConfig {
            host: "https://search.example".into(),
            limit: 20,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let decoded: ClientConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.host, "https://search.example");
        assert_eq!(decoded.limit, 20);
    }

    #[test]
    fn options_serde_round_trip() {
        let options = ClientOptions {
            proxied: Some(true),
            proxy: Some("http://proxy.example:8080".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).expect("serialize");
        let decoded: ClientOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.proxied, Some(true));
        assert!(decoded.host.is_none());
    }
}
