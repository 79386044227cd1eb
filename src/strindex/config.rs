//! Server configuration.
//!
//! Every option can be given on the command line or through the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STRINDEX_HOST` | 127.0.0.1 | Host to bind |
//! | `STRINDEX_PORT` | 8000 | Server port |
//! | `STRINDEX_LOG_LEVEL` | info | Log level |
//! | `STRINDEX_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//!
//! `RUST_LOG`, when set, takes precedence over the log level.

use clap::Args;

const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[arg(long, env = "STRINDEX_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "STRINDEX_PORT", default_value = "8000")]
    pub port: u16,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "STRINDEX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "STRINDEX_MAX_BODY_SIZE", default_value_t = DEFAULT_MAX_BODY_SIZE)]
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level: {}", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }
}
