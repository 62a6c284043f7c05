use std::env;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,

    pub api_prefix: String,
    pub rate_api_per_min: u32,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow!("{key} must be set"));

        Ok(Self {
            server_addr: required("SERVER_ADDR")?,
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,

            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            rate_api_per_min: parse_or(&lookup, "RATE_API_PER_MIN", 1000)?,

            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: parse_or(&lookup, "LOG_LEVEL", tracing::Level::DEBUG)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_required_vars_are_set() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "mysql://localhost/employees"),
        ]))
        .unwrap();

        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.database_max_connections, 10);
        assert!(config.run_migrations);
        assert_eq!(config.rate_api_per_min, 1000);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn missing_required_var_is_named() {
        let err = Config::from_lookup(lookup(&[("SERVER_ADDR", "127.0.0.1:8080")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn unparsable_value_is_named() {
        let err = Config::from_lookup(lookup(&[
            ("SERVER_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "mysql://localhost/employees"),
            ("RATE_API_PER_MIN", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("RATE_API_PER_MIN"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_ADDR", "0.0.0.0:9000"),
            ("DATABASE_URL", "mysql://db/employees"),
            ("RUN_MIGRATIONS", "false"),
            ("LOG_LEVEL", "info"),
            ("API_PREFIX", "/v2"),
        ]))
        .unwrap();

        assert!(!config.run_migrations);
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.api_prefix, "/v2");
    }
}
