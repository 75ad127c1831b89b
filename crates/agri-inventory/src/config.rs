//! Runtime configuration, read from `AGRI_*` environment variables.
//!
//! Unset or unparsable values fall back to their defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Mailbox size of each actor.
    pub mailbox_capacity: usize,
    pub log_format: LogFormat,
    /// JSON file with products and orders to load at startup.
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            log_format: LogFormat::default(),
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("AGRI_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("AGRI_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            // tokio refuses a zero-sized mailbox
            mailbox_capacity: lookup("AGRI_MAILBOX_CAPACITY")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.mailbox_capacity),
            log_format: lookup("AGRI_LOG_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_format),
            seed_file: lookup("AGRI_SEED_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.mailbox_capacity, 32);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AGRI_HOST", "127.0.0.1"),
            ("AGRI_PORT", "9000"),
            ("AGRI_MAILBOX_CAPACITY", "128"),
            ("AGRI_LOG_FORMAT", "JSON"),
            ("AGRI_SEED_FILE", "seed.json"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.mailbox_capacity, 128);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("AGRI_PORT", "eighty"),
            ("AGRI_MAILBOX_CAPACITY", "0"),
            ("AGRI_LOG_FORMAT", "pretty"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.mailbox_capacity, 32);
        assert_eq!(config.log_format, LogFormat::Compact);
    }
}
