/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, HTTP の上限値など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// HTTP-level limits applied by `middleware::http`.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub body_limit_bytes: usize,
    pub timeout: Duration,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub http: HttpLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let body_limit_bytes =
            parse_or(&lookup, "HTTP_BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;

        let timeout_seconds: u64 =
            parse_or(&lookup, "HTTP_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS)?;
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"));
        }

        Ok(Self {
            addr,
            app_env,
            http: HttpLimits {
                body_limit_bytes,
                timeout: Duration::from_secs(timeout_seconds),
            },
        })
    }
}

// Unset falls back to the default; set-but-unparsable is a startup error.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.http.body_limit_bytes, 1024 * 1024);
        assert_eq!(config.http.timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("HTTP_BODY_LIMIT_BYTES", "2048"),
            ("HTTP_TIMEOUT_SECONDS", "5"),
        ])
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(config.http.body_limit_bytes, 2048);
        assert_eq!(config.http.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_port_fails() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));
        assert_eq!(err.to_string(), "invalid configuration: PORT");
    }

    #[test]
    fn zero_timeout_fails() {
        let err = config_from(&[("HTTP_TIMEOUT_SECONDS", "0")]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"));
    }

    #[test]
    fn unknown_app_env_is_development() {
        assert_eq!(AppEnv::parse(Some("staging")), AppEnv::Development);
        assert_eq!(AppEnv::parse(None), AppEnv::Development);
    }
}
