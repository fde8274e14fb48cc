use std::fmt;
use std::time::Duration;

use crate::adapters::civic::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};

/// Environment variable holding the civic information API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// API credential; never printed in full.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "event_manager"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Writes thank-you letters for event attendees and reports popular registration times")
)]
#[derive(Debug, Clone)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "event_attendees.csv"))]
    pub attendees_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "form_letter.html"))]
    pub template_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "output"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_ENDPOINT))]
    pub api_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "10"))]
    pub request_timeout_secs: u64,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(skip))]
    pub api_key: Option<ApiKey>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            attendees_path: "event_attendees.csv".to_string(),
            template_path: "form_letter.html".to_string(),
            output_path: "output".to_string(),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 10,
            verbose: false,
            api_key: None,
        }
    }
}

impl CliConfig {
    /// Reads the credential from [`API_KEY_ENV`]; an empty value counts as unset.
    pub fn with_api_key_from_env(mut self) -> Self {
        self.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(ApiKey::new);
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }
}

impl ConfigProvider for CliConfig {
    fn attendees_path(&self) -> &str {
        &self.attendees_path
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(ApiKey::expose)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("attendees_path", &self.attendees_path)?;
        validate_path("template_path", &self.template_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = CliConfig::default();
        assert_eq!(config.attendees_path(), "event_attendees.csv");
        assert_eq!(config.template_path(), "form_letter.html");
        assert_eq!(config.output_path(), "output");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_without_flags_uses_defaults() {
        use clap::Parser;

        let config = CliConfig::parse_from(["event_manager"]);
        assert_eq!(config.attendees_path, "event_attendees.csv");
        assert_eq!(config.api_endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_api_key_is_redacted() {
        let config = CliConfig::default().with_api_key("super-secret");
        assert_eq!(config.api_key(), Some("super-secret"));
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = CliConfig {
            request_timeout_secs: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
