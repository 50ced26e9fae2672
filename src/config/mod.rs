//! Configuration loaded from `CREDSCRUB_*` environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::secrets::SecretString;

/// Transport used to reach the secret service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretTransport {
    #[default]
    Http,
    Grpc,
}

impl SecretTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Grpc => "grpc",
        }
    }
}

impl FromStr for SecretTransport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "grpc" => Ok(Self::Grpc),
            _ => Err(format!("Unknown secret transport: {}", s)),
        }
    }
}

impl fmt::Display for SecretTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Secret management settings.
#[derive(Debug, Clone, Default)]
pub struct SecretsConfig {
    /// Master switch; everything degrades to the no-op store when false.
    pub enabled: bool,
    /// Secret service base URL (HTTP) or URI (gRPC).
    pub endpoint: Option<String>,
    pub transport: SecretTransport,
    /// Caller-supplied authorization material for the RPC transport.
    pub auth_token: Option<SecretString>,
    /// Prefix prepended to every storage path (e.g. `"prod/"`).
    pub path_prefix: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub secrets: SecretsConfig,
}

impl Config {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let enabled = match env::var("CREDSCRUB_SECRETS_ENABLED") {
            Ok(value) => parse_bool(&value)
                .ok_or_else(|| Error::config(format!("Invalid CREDSCRUB_SECRETS_ENABLED: {}", value)))?,
            Err(_) => false,
        };

        let endpoint = env::var("CREDSCRUB_SECRETS_ENDPOINT").ok().filter(|s| !s.is_empty());

        let transport = match env::var("CREDSCRUB_SECRETS_TRANSPORT") {
            Ok(value) => value.parse().map_err(Error::config)?,
            Err(_) => SecretTransport::Http,
        };

        let auth_token = env::var("CREDSCRUB_SECRETS_AUTH_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .map(SecretString::new);

        let path_prefix = env::var("CREDSCRUB_SECRETS_PATH_PREFIX").unwrap_or_default();

        Ok(Self {
            secrets: SecretsConfig { enabled, endpoint, transport, auth_token, path_prefix },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    // Environment mutation is process-global; serialize the tests that
    // touch CREDSCRUB_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.secrets.enabled);
        assert_eq!(config.secrets.transport, SecretTransport::Http);
        assert_eq!(config.secrets.path_prefix, "");
    }

    #[test]
    fn test_config_from_env() {
        let _guard = env_guard();
        env::set_var("CREDSCRUB_SECRETS_ENABLED", "true");
        env::set_var("CREDSCRUB_SECRETS_ENDPOINT", "http://localhost:9000");
        env::set_var("CREDSCRUB_SECRETS_TRANSPORT", "grpc");
        env::set_var("CREDSCRUB_SECRETS_AUTH_TOKEN", "token-value");
        env::set_var("CREDSCRUB_SECRETS_PATH_PREFIX", "prod/");

        let config = Config::from_env().unwrap();
        assert!(config.secrets.enabled);
        assert_eq!(config.secrets.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.secrets.transport, SecretTransport::Grpc);
        assert_eq!(config.secrets.auth_token.unwrap().expose_secret(), "token-value");
        assert_eq!(config.secrets.path_prefix, "prod/");

        env::remove_var("CREDSCRUB_SECRETS_ENABLED");
        env::remove_var("CREDSCRUB_SECRETS_ENDPOINT");
        env::remove_var("CREDSCRUB_SECRETS_TRANSPORT");
        env::remove_var("CREDSCRUB_SECRETS_AUTH_TOKEN");
        env::remove_var("CREDSCRUB_SECRETS_PATH_PREFIX");
    }

    #[test]
    fn test_invalid_transport_is_rejected() {
        let _guard = env_guard();
        env::set_var("CREDSCRUB_SECRETS_TRANSPORT", "carrier-pigeon");
        let result = Config::from_env();
        env::remove_var("CREDSCRUB_SECRETS_TRANSPORT");
        assert!(result.is_err());
    }

    #[test]
    fn test_transport_round_trip() {
        for transport in [SecretTransport::Http, SecretTransport::Grpc] {
            let parsed: SecretTransport = transport.as_str().parse().unwrap();
            assert_eq!(parsed, transport);
        }
    }
}
