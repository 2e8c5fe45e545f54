use std::time::Duration;

use serde::Deserialize;
use serde_with::{serde_as, DurationSecondsWithFrac};

use crate::constants::DEFAULT_TIMEOUT;

/// Configuration for building an [`IapUtil`](crate::util::IapUtil).
///
/// Can be deserialized from an application's config file, for example:
///
/// ```json
/// { "isProduction": true, "developerToken": "...", "timeout": 2.5 }
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Accepted for compatibility, but currently has no effect: Roku only
    /// exposes a single (production) endpoint, which is always used.
    #[serde(default)]
    pub is_production: bool,
    /// Developer token issued by Roku. Embedded in the request URL path.
    pub developer_token: String,
    /// Timeout for the full request (connect and read). Unset or zero falls
    /// back to 5 seconds. Given in (fractional) seconds when deserialized.
    #[serde_as(as = "Option<DurationSecondsWithFrac<f64>>")]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(developer_token: impl Into<String>) -> Self {
        Self {
            developer_token: developer_token.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The timeout that will actually be applied to requests.
    pub fn resolved_timeout(&self) -> Duration {
        match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_timeout_resolves_to_default() {
        let config = ClientConfig::new("devToken");
        assert_eq!(config.resolved_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_timeout_resolves_to_default() {
        let config = ClientConfig::new("devToken").with_timeout(Duration::ZERO);
        assert_eq!(config.resolved_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_explicit_timeout_is_kept() {
        let config = ClientConfig::new("devToken").with_timeout(Duration::from_secs(2));
        assert_eq!(config.resolved_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_deserialize_full_config() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"isProduction": true, "developerToken": "devToken", "timeout": 2.5}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ClientConfig {
                is_production: true,
                developer_token: "devToken".to_owned(),
                timeout: Some(Duration::from_millis(2500)),
            }
        );
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"developerToken": "devToken"}"#).unwrap();
        assert!(!config.is_production);
        assert_eq!(config.timeout, None);
        assert_eq!(config.resolved_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_requires_developer_token() {
        assert!(serde_json::from_str::<ClientConfig>(r#"{"timeout": 2}"#).is_err());
    }
}
