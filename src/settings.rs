//! Runtime settings from environment variables (a `.env` file is honored by the binary).

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/products";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

const REDACTED: &str = "***";
const UNPARSEABLE: &str = "<unparseable database url>";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Settings {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: parse_or(get("BIND_ADDR"), "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", Some(DEFAULT_MAX_CONNECTIONS))?,
            acquire_timeout: Duration::from_secs(parse_or(
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                "DB_ACQUIRE_TIMEOUT_SECS",
                Some(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            )?),
            body_limit_bytes: parse_or(get("BODY_LIMIT_BYTES"), "BODY_LIMIT_BYTES", Some(DEFAULT_BODY_LIMIT_BYTES))?,
        })
    }

    /// Database URL with any password replaced, safe for logs.
    pub fn redacted_database_url(&self) -> String {
        redact_url(&self.database_url)
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: Option<T>) -> Result<T, SettingsError> {
    match raw {
        Some(v) => match v.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(SettingsError::Invalid { key, value: v }),
        },
        None => default.ok_or(SettingsError::Invalid {
            key,
            value: String::new(),
        }),
    }
}

/// Mask the userinfo password and any `password` query parameter.
/// An unparseable URL is not echoed at all.
pub fn redact_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return UNPARSEABLE.to_string();
    };
    if url.cannot_be_a_base() {
        return UNPARSEABLE.to_string();
    }
    if url.password().is_some() && url.set_password(Some(REDACTED)).is_err() {
        return UNPARSEABLE.to_string();
    }
    if url.query_pairs().any(|(k, _)| k.eq_ignore_ascii_case("password")) {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if k.eq_ignore_ascii_case("password") {
                    REDACTED.to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(s.max_connections, 5);
        assert_eq!(s.acquire_timeout, Duration::from_secs(8));
        assert_eq!(s.body_limit_bytes, 65536);
    }

    #[test]
    fn reads_overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://u:p@db:5432/shop"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_ACQUIRE_TIMEOUT_SECS", " 3 "),
            ("BODY_LIMIT_BYTES", ""),
        ]))
        .unwrap();
        assert_eq!(s.database_url, "postgres://u:p@db:5432/shop");
        assert_eq!(s.bind_addr.port(), 8080);
        assert_eq!(s.max_connections, 12);
        assert_eq!(s.acquire_timeout, Duration::from_secs(3));
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn rejects_garbage() {
        let err = Settings::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert_eq!(
            err,
            SettingsError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "many".into()
            }
        );
    }

    #[test]
    fn redacts_passwords_only() {
        assert_eq!(
            redact_url("postgres://admin:s3cr@t@db:5432/products"),
            "postgres://admin:***@db:5432/products"
        );
        assert_eq!(redact_url("postgres://admin@db/products"), "postgres://admin@db/products");
        assert_eq!(redact_url("postgres://localhost/products"), "postgres://localhost/products");
    }

    #[test]
    fn redacts_password_query_parameter() {
        let redacted = redact_url("postgres://admin@db:5432/products?sslmode=require&password=hunter2");
        assert!(!redacted.contains("hunter2"), "{}", redacted);
        assert_eq!(redacted, "postgres://admin@db:5432/products?sslmode=require&password=***");
    }

    #[test]
    fn unparseable_url_is_not_echoed() {
        assert_eq!(redact_url("//admin:hunter2@db/products"), UNPARSEABLE);
        assert_eq!(redact_url("admin:hunter2@db"), UNPARSEABLE);
    }
}
