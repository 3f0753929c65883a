use super::ServerError;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | BIND_ADDR | 0.0.0.0 | HTTP listen address |
/// | DATABASE_PATH | cafe_orders.db | SQLite file (`:memory:` for a throwaway store) |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | default filter when RUST_LOG is unset |
/// | LOG_JSON | false | emit JSON log lines |
/// | LOG_DIR | (unset) | daily rolling log files in this directory |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (milliseconds) |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/cafe.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// HTTP bind address
    pub bind_addr: String,
    /// SQLite database file path
    pub database_path: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// JSON formatted logs
    pub log_json: bool,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into()),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "cafe_orders.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.database_path.trim().is_empty() {
            return Err(ServerError::Config("DATABASE_PATH must not be empty".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ServerError::Config(
                "REQUEST_TIMEOUT_MS must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// `host:port` the listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
