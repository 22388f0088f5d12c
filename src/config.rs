use std::env;
use std::str::FromStr;
use log::{info, debug};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_SESSIONS: usize = 1000;
const DEFAULT_CORS_MAX_AGE: usize = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_sessions: usize,
    pub cors_max_age: usize,
}

impl ServerConfig {
    /// Reads the process environment (after `.env` has been applied).
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServerConfig {
            host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            max_sessions: parse_var(&lookup, "MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?,
            cors_max_age: parse_var(&lookup, "CORS_MAX_AGE", DEFAULT_CORS_MAX_AGE)?,
        };

        if config.max_sessions == 0 {
            return Err("MAX_SESSIONS must be greater than zero".into());
        }

        debug!("Loaded server config: {:?}", config);
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => {
            info!("Using {} from environment", name);
            value
                .trim()
                .parse::<T>()
                .map_err(|e| format!("Invalid value for {}: {} ({})", name, value, e).into())
        }
        None => Ok(default),
    }
}
