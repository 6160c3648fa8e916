use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to (default: 0.0.0.0:3000)
    #[serde(default = "Config::default_bind_addr")]
    pub bind_addr: String,
    /// Allowed CORS origins. Required unless cors_permissive is true.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Explicitly allow all origins (development only). Defaults to false.
    #[serde(default)]
    pub cors_permissive: bool,
    /// Ministry fuel price API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// IANA timezone used to evaluate "open now" (default: Europe/Madrid)
    #[serde(default = "Config::default_timezone")]
    pub timezone: String,
}

/// Settings for the minetur REST API client
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the ministry API (default: the production endpoint)
    #[serde(default = "UpstreamConfig::default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "UpstreamConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds (default: 10)
    #[serde(default = "UpstreamConfig::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
            connect_timeout_secs: Self::default_connect_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    fn default_base_url() -> String {
        "https://sedeaplicaciones.minetur.gob.es".to_string()
    }
    fn default_timeout_secs() -> u64 {
        30
    }
    fn default_connect_timeout_secs() -> u64 {
        10
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: Self::default_bind_addr(),
            cors_origins: Vec::new(),
            cors_permissive: false,
            upstream: UpstreamConfig::default(),
            timezone: Self::default_timezone(),
        }
    }
}

impl Config {
    fn default_bind_addr() -> String {
        "0.0.0.0:3000".to_string()
    }

    fn default_timezone() -> String {
        "Europe/Madrid".to_string()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Parse the configured timezone, falling back to Europe/Madrid with a
    /// warning when it is not a known IANA name.
    pub fn parsed_timezone(&self) -> chrono_tz::Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(
                timezone = %self.timezone,
                "Unknown timezone in config, falling back to Europe/Madrid"
            );
            chrono_tz::Europe::Madrid
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("cors_permissive: true").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.timezone, "Europe/Madrid");
        assert_eq!(
            config.upstream.base_url,
            "https://sedeaplicaciones.minetur.gob.es"
        );
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(config.cors_permissive);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn upstream_overrides_apply() {
        let yaml = r#"
upstream:
  base_url: "http://localhost:8080/"
  timeout_secs: 5
timezone: "Atlantic/Canary"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.upstream.base_url, "http://localhost:8080/");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.upstream.connect_timeout_secs, 10);
        assert_eq!(config.parsed_timezone(), chrono_tz::Atlantic::Canary);
    }

    #[test]
    fn bad_timezone_falls_back_to_madrid() {
        let config = Config {
            timezone: "Mars/Olympus".into(),
            ..Default::default()
        };
        assert_eq!(config.parsed_timezone(), chrono_tz::Europe::Madrid);
    }
}
