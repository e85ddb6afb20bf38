use dotenv::dotenv;
use std::env;
use std::net::{AddrParseError, SocketAddr};

/// Relative path, so each working directory gets its own store file.
const DEFAULT_DATABASE_URL: &str = "sqlite:students.db?mode=rwc";
/// Known-weak signing secret, kept as the out-of-the-box default for parity
/// with the deployments this service replaces. Override with SESSION_SECRET.
const DEFAULT_SESSION_SECRET: &str = "secret123";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub session_secret: String,
}

impl Config {
    /// Every knob has a default; the environment only overrides.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenv().ok();
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()?;
        Ok(Config {
            bind_addr,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string()),
        })
    }
}
