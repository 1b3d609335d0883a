//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration for the route resolver client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Issue tracker server settings.
    pub server: ServerConfig,

    /// Redirect handling.
    pub navigation: NavigationConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Message catalog overrides.
    pub i18n: I18nConfig,

    /// Desktop shell integration.
    pub desktop: DesktopConfig,
}

/// Server connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server root URL (e.g., "https://tracker.example.com/webissues/").
    pub base_url: String,

    /// Path of the API relative to the server root.
    pub api_path: String,

    /// Suffix appended to every endpoint path.
    pub endpoint_suffix: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            api_path: "/server/api".to_string(),
            endpoint_suffix: ".php".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Navigation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Maximum redirects followed for one navigation.
    pub max_redirects: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { max_redirects: 4 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Message catalog configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Message key → template overrides. `{0}`, `{1}`... are replaced by arguments.
    pub messages: HashMap<String, String>,
}

/// Desktop shell configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Directory of downloaded attachments. Enables the `ClientDownload` route.
    pub attachments_dir: Option<PathBuf>,
}

impl DesktopConfig {
    pub fn enabled(&self) -> bool {
        self.attachments_dir.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.api_path, "/server/api");
        assert_eq!(config.navigation.max_redirects, 4);
        assert!(!config.desktop.enabled());
    }

    #[test]
    fn test_full_config() {
        let config: ClientConfig = toml::from_str(
            r#"
            [server]
            base_url = "https://tracker.example.com/"
            timeout_secs = 5

            [observability]
            log_format = "json"

            [i18n.messages]
            "EditComment.CommentQuote" = "Kommentar {0}"

            [desktop]
            attachments_dir = "/var/cache/attachments"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.timeout_secs, 5);
        assert_eq!(config.server.endpoint_suffix, ".php");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(
            config.i18n.messages.get("EditComment.CommentQuote").map(String::as_str),
            Some("Kommentar {0}")
        );
        assert!(config.desktop.enabled());
    }
}
