use std::env;
use std::str::FromStr;
use std::time::Duration;

use ark::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use ark::comparison::DEFAULT_TEXT_MAX_COMPLETION_TOKENS;
use tracing::warn;

/// Remote model endpoint, timeouts and token budget.
///
/// The API key is deliberately absent: every request brings its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ArkConfig {
    pub endpoint: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub vision_read_timeout: Duration,
    pub text_read_timeout: Duration,
    pub text_max_completion_tokens: u32,
}

impl ArkConfig {
    /// Load Ark configuration from environment variables
    ///
    /// Environment variables:
    /// - ARK_API_URL: chat-completions endpoint
    /// - ARK_MODEL: model name used for both extraction and comparison
    /// - CONNECT_TIMEOUT_SECONDS (default: 30)
    /// - VISION_READ_TIMEOUT_SECONDS (default: 180)
    /// - TEXT_READ_TIMEOUT_SECONDS (default: 600)
    /// - TEXT_MAX_COMPLETION_TOKENS (default: 8192)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seconds = |key: &str, default: u64| Duration::from_secs(parse_or(&lookup, key, default));

        Self {
            endpoint: lookup("ARK_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: lookup("ARK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            connect_timeout: seconds("CONNECT_TIMEOUT_SECONDS", 30),
            vision_read_timeout: seconds("VISION_READ_TIMEOUT_SECONDS", 180),
            text_read_timeout: seconds("TEXT_READ_TIMEOUT_SECONDS", 600),
            text_max_completion_tokens: parse_or(
                &lookup,
                "TEXT_MAX_COMPLETION_TOKENS",
                DEFAULT_TEXT_MAX_COMPLETION_TOKENS,
            ),
        }
    }
}

impl Default for ArkConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value {:?} for {}, using default {}", raw, key, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ArkConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ArkConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = ArkConfig::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.vision_read_timeout, Duration::from_secs(180));
        assert_eq!(config.text_read_timeout, Duration::from_secs(600));
        assert_eq!(config.text_max_completion_tokens, 8192);
    }

    #[test]
    fn should_override_timeouts_and_tokens() {
        let config = config_from(&[
            ("CONNECT_TIMEOUT_SECONDS", "5"),
            ("VISION_READ_TIMEOUT_SECONDS", " 90 "),
            ("TEXT_READ_TIMEOUT_SECONDS", "1200"),
            ("TEXT_MAX_COMPLETION_TOKENS", "16384"),
            ("ARK_MODEL", "doubao-custom"),
        ]);

        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.vision_read_timeout, Duration::from_secs(90));
        assert_eq!(config.text_read_timeout, Duration::from_secs(1200));
        assert_eq!(config.text_max_completion_tokens, 16384);
        assert_eq!(config.model, "doubao-custom");
    }

    #[test]
    fn should_fall_back_to_default_on_invalid_numbers() {
        let config = config_from(&[
            ("VISION_READ_TIMEOUT_SECONDS", "three minutes"),
            ("TEXT_MAX_COMPLETION_TOKENS", "-1"),
        ]);

        assert_eq!(config.vision_read_timeout, Duration::from_secs(180));
        assert_eq!(config.text_max_completion_tokens, 8192);
    }
}
