//! SendGrid configuration

use secrecy::SecretString;
use serde::Deserialize;

/// SendGrid service configuration
///
/// The API key and from-address have no usable defaults; absence of either
/// is a fatal configuration error at client construction.
#[derive(Debug, Clone, Deserialize)]
pub struct SendGridConfig {
    /// SendGrid API key
    pub api_key: SecretString,

    /// Verified sender address
    pub from_email: String,

    /// API base URL (default: <https://api.sendgrid.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.sendgrid.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let config: SendGridConfig = serde_json::from_str(
            r#"{"api_key": "SG.test", "from_email": "bot@example.com"}"#,
        )
        .unwrap();
        assert_eq!(config.api_key.expose_secret(), "SG.test");
        assert_eq!(config.from_email, "bot@example.com");
        assert_eq!(config.base_url, "https://api.sendgrid.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn debug_does_not_leak_the_api_key() {
        let config: SendGridConfig = serde_json::from_str(
            r#"{"api_key": "SG.supersecret", "from_email": "bot@example.com"}"#,
        )
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("SG.supersecret"));
    }
}
