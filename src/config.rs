use std::{env, net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;

pub const DEFAULT_GITHUB_HOST: &str = "https://github.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
// 200ms/token (~5 req/sec), with room for short bursts
pub const DEFAULT_RATE_LIMIT_MILLISECONDS: u64 = 200;
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// How `/callback` treats the `state` issued by `/auth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateCheck {
    /// Never compare; the state is only an opaque marker in the URL.
    Off,
    /// Compare when the browser sent the `oauth_state` cookie.
    #[default]
    Lenient,
    /// The cookie and a matching `state` parameter are required.
    Strict,
}

impl FromStr for StateCheck {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(StateCheck::Off),
            "lenient" => Ok(StateCheck::Lenient),
            "strict" => Ok(StateCheck::Strict),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub host: String,
}

#[derive(Debug, Clone)]
pub struct TlsSettings {
    pub cert_path: String,
    pub key_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_millisecond: u64,
    pub burst: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub github: GitHubOAuthSettings,
    pub public_host: Option<String>,
    pub state_check: StateCheck,
    pub allowed_origins: Vec<String>,
    pub http_timeout: Duration,
    pub rate_limit: RateLimitSettings,
    pub tls: Option<TlsSettings>,
}

/// Parses a strictly positive number, reporting `name` when it is not one.
fn parse_positive<T>(name: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|value| *value > T::default())
        .ok_or(ConfigError::Invalid { name, value: raw })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok(); // Load .env file
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let client_id = get("GH_OAUTH_ID").ok_or(ConfigError::Missing("GH_OAUTH_ID"))?;
        let client_secret =
            get("GH_OAUTH_SECRET").ok_or(ConfigError::Missing("GH_OAUTH_SECRET"))?;
        let host = get("GH_OAUTH_HOST")
            .map(|h| h.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GITHUB_HOST.to_string());

        let bind_raw = get("RELAY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                name: "RELAY_BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        let state_check = match get("OAUTH_STATE_CHECK") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "OAUTH_STATE_CHECK",
                value: raw,
            })?,
            None => StateCheck::default(),
        };

        let http_timeout = match get("OAUTH_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("OAUTH_HTTP_TIMEOUT_SECS", raw)?),
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let rate_limit = RateLimitSettings {
            per_millisecond: match get("RATE_LIMITER_MILLISECONDS") {
                Some(raw) => parse_positive("RATE_LIMITER_MILLISECONDS", raw)?,
                None => DEFAULT_RATE_LIMIT_MILLISECONDS,
            },
            burst: match get("RATE_LIMITER_BURST") {
                Some(raw) => parse_positive("RATE_LIMITER_BURST", raw)?,
                None => DEFAULT_RATE_LIMIT_BURST,
            },
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let tls = match (get("TLS_CERT_PATH"), get("TLS_KEY_PATH")) {
            (Some(cert_path), Some(key_path)) => Some(TlsSettings {
                cert_path,
                key_path,
            }),
            (Some(_), None) => return Err(ConfigError::Missing("TLS_KEY_PATH")),
            (None, Some(_)) => return Err(ConfigError::Missing("TLS_CERT_PATH")),
            (None, None) => None,
        };

        Ok(Config {
            bind_addr,
            github: GitHubOAuthSettings {
                client_id,
                client_secret,
                host,
            },
            public_host: get("RELAY_PUBLIC_HOST").map(|h| h.trim().to_ascii_lowercase()),
            state_check,
            allowed_origins,
            http_timeout,
            rate_limit,
            tls,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_config(host: &str) -> Config {
    Config {
        bind_addr: DEFAULT_BIND_ADDR.parse().expect("valid default addr"),
        github: GitHubOAuthSettings {
            client_id: "client-123".into(),
            client_secret: "secret-456".into(),
            host: host.into(),
        },
        public_host: None,
        state_check: StateCheck::Lenient,
        allowed_origins: Vec::new(),
        http_timeout: Duration::from_secs(5),
        rate_limit: RateLimitSettings {
            per_millisecond: DEFAULT_RATE_LIMIT_MILLISECONDS,
            burst: DEFAULT_RATE_LIMIT_BURST,
        },
        tls: None,
    }
}
