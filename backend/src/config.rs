//! Runtime configuration for the learning portal backend

use clap::Parser;
use std::net::SocketAddr;

/// Server configuration, read from command-line flags or environment
#[derive(Parser, Debug, Clone)]
#[command(name = "learning-portal-backend")]
#[command(about = "Learning activity and exposure report API")]
#[command(version)]
pub struct Config {
    /// SQLite database URL
    #[arg(long, default_value = "sqlite:learning_portal.db", env = "PORTAL_DATABASE_URL")]
    pub database_url: String,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000", env = "PORTAL_BIND_ADDR")]
    pub bind_addr: SocketAddr,

    /// Origin allowed to call the API from a browser
    #[arg(long, default_value = "http://localhost:8080", env = "PORTAL_CORS_ORIGIN")]
    pub cors_origin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["learning-portal-backend"]);
        assert_eq!(config.database_url, "sqlite:learning_portal.db");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.cors_origin, "http://localhost:8080");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::parse_from([
            "learning-portal-backend",
            "--database-url",
            "sqlite::memory:",
            "--bind-addr",
            "0.0.0.0:8081",
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8081);
    }
}
