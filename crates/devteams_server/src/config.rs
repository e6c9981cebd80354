//! Process configuration parsed from flags and environment variables.

use devteams_core::default_log_level;
use std::path::PathBuf;

#[derive(Debug, Clone, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "REST API for managing development teams and their programmers"
)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "DEVTEAMS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// SQLite database file. An in-memory store is used when omitted.
    #[arg(long, env = "DEVTEAMS_DATABASE")]
    pub database: Option<PathBuf>,

    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "DEVTEAMS_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Absolute directory for rotating log files. Logs go to stderr when omitted.
    #[arg(long, env = "DEVTEAMS_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Base URL used for hypermedia links, e.g. `https://api.example.com`.
    /// Derived from the request `Host` header when omitted.
    #[arg(long, env = "DEVTEAMS_PUBLIC_URL")]
    pub public_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "devteams",
            "--bind",
            "0.0.0.0:9000",
            "--database",
            "/var/lib/devteams/db.sqlite3",
            "--log-level",
            "warn",
            "--public-url",
            "https://api.example.com",
        ])
        .expect("flags should parse");

        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(
            config.database,
            Some(PathBuf::from("/var/lib/devteams/db.sqlite3"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.public_url.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(ServerConfig::try_parse_from(["devteams", "--port", "1"]).is_err());
    }
}
