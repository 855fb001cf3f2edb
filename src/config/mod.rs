//! Configuration module for the goal tracker backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Insert the demo team when no members exist yet
    pub seed_demo: bool,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("GOALS_DB_PATH")
            .unwrap_or_else(|_| "./data/goals.sqlite".to_string())
            .into();

        let bind_addr = env::var("GOALS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("GOALS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo = env::var("GOALS_SEED_DEMO")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let cors_origins = env::var("GOALS_CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed_demo,
            cors_origins,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("GOALS_DB_PATH");
        env::remove_var("GOALS_BIND_ADDR");
        env::remove_var("GOALS_LOG_LEVEL");
        env::remove_var("GOALS_SEED_DEMO");
        env::remove_var("GOALS_CORS_ORIGINS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/goals.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, http://127.0.0.1:5173,,"),
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
        assert!(parse_origins("  ").is_empty());
    }
}
