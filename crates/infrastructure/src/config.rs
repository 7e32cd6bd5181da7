//! Application configuration
//!
//! Loaded in three layers: built-in defaults, an optional `config` file
//! (TOML/YAML/JSON, resolved by the `config` crate), and environment
//! variables prefixed with `WAYPOINT`. Nesting uses a double underscore so
//! that snake_case field names stay addressable: `WAYPOINT_SERVER__PORT`,
//! `WAYPOINT_PLANNER__BASE_URL`, `WAYPOINT_SENDGRID__API_KEY`.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

pub use integration_planner::PlannerConfig;
pub use integration_sendgrid::SendGridConfig;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow any origin)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_shutdown_timeout() -> Option<u64> {
    Some(30)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    /// Directory where generated itineraries are written
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

fn default_directory() -> PathBuf {
    PathBuf::from("./documents")
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

/// Main application configuration
///
/// The `sendgrid` section is optional: without it the service starts with
/// email disabled and every send attempt fails with a configuration error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Planning backend settings
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Document store settings
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// SendGrid settings; absent means email is disabled
    #[serde(default)]
    pub sendgrid: Option<SendGridConfig>,
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file, and
    /// `WAYPOINT_`-prefixed environment variables (later layers win)
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment values cannot be
    /// parsed into the expected shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(environment_source())
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("planner.base_url", "http://localhost:8000")?
            .set_default("documents.directory", "./documents")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            planner_url = %config.planner.base_url,
            email_enabled = config.sendgrid.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Environment layer: `WAYPOINT_` prefix, `__` between nesting levels so
/// snake_case keys like `planner.base_url` survive the mapping
fn environment_source() -> config::Environment {
    config::Environment::with_prefix("WAYPOINT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 3000);
        assert!(server.allowed_origins.is_empty());
        assert_eq!(server.shutdown_timeout_secs, Some(30));
    }

    #[test]
    fn documents_default_directory() {
        let documents = DocumentsConfig::default();
        assert_eq!(documents.directory, PathBuf::from("./documents"));
    }

    #[test]
    fn empty_config_deserializes_with_email_disabled() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.planner.base_url, "http://localhost:8000");
        assert_eq!(config.planner.timeout_secs, 120);
        assert!(config.sendgrid.is_none());
    }

    #[test]
    fn sendgrid_section_enables_email() {
        let config: AppConfig = serde_json::from_str(
            r#"{"sendgrid": {"api_key": "SG.test", "from_email": "bot@example.com"}}"#,
        )
        .unwrap();
        let sendgrid = config.sendgrid.expect("sendgrid section");
        assert_eq!(sendgrid.api_key.expose_secret(), "SG.test");
        assert_eq!(sendgrid.from_email, "bot@example.com");
    }

    #[test]
    fn environment_variables_reach_nested_snake_case_keys() {
        let vars = std::collections::HashMap::from([
            ("WAYPOINT_SERVER__PORT".to_string(), "8080".to_string()),
            (
                "WAYPOINT_PLANNER__BASE_URL".to_string(),
                "http://backend:9000".to_string(),
            ),
            (
                "WAYPOINT_SENDGRID__API_KEY".to_string(),
                "SG.env-key".to_string(),
            ),
            (
                "WAYPOINT_SENDGRID__FROM_EMAIL".to_string(),
                "bot@example.com".to_string(),
            ),
        ]);

        let config = AppConfig::load_with_env(environment_source().source(Some(vars))).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.planner.base_url, "http://backend:9000");
        let sendgrid = config.sendgrid.expect("sendgrid section from environment");
        assert_eq!(sendgrid.api_key.expose_secret(), "SG.env-key");
        assert_eq!(sendgrid.from_email, "bot@example.com");
    }

    #[test]
    fn partial_sendgrid_environment_fails_instead_of_dropping_keys() {
        let vars = std::collections::HashMap::from([(
            "WAYPOINT_SENDGRID__API_KEY".to_string(),
            "SG.env-key".to_string(),
        )]);

        // api_key without from_email cannot form a complete sendgrid section
        let err = AppConfig::load_with_env(environment_source().source(Some(vars))).unwrap_err();
        assert!(err.to_string().contains("from_email"));
    }

    #[test]
    fn planner_section_overrides_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"planner": {"base_url": "http://backend:9000", "timeout_secs": 10}}"#,
        )
        .unwrap();
        assert_eq!(config.planner.base_url, "http://backend:9000");
        assert_eq!(config.planner.timeout_secs, 10);
    }
}
