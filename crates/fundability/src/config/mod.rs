use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_BUSINESS_CATALOG: &str = "data/business_primary_tradelines.json";
const DEFAULT_CONSUMER_CATALOG: &str = "data/consumer_primary_tradelines.json";
const DEFAULT_AUTHORIZED_USER_CATALOG: &str = "data/authorized_user_tradelines.json";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            catalog: CatalogConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Locations of the static tradeline sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub business_path: PathBuf,
    pub consumer_path: PathBuf,
    /// Optional; a missing file loads no authorized-user candidates.
    pub authorized_users_path: PathBuf,
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            business_path: catalog_path("FUNDABILITY_BUSINESS_CATALOG", DEFAULT_BUSINESS_CATALOG)?,
            consumer_path: catalog_path("FUNDABILITY_CONSUMER_CATALOG", DEFAULT_CONSUMER_CATALOG)?,
            authorized_users_path: catalog_path(
                "FUNDABILITY_AU_CATALOG",
                DEFAULT_AUTHORIZED_USER_CATALOG,
            )?,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            business_path: PathBuf::from(DEFAULT_BUSINESS_CATALOG),
            consumer_path: PathBuf::from(DEFAULT_CONSUMER_CATALOG),
            authorized_users_path: PathBuf::from(DEFAULT_AUTHORIZED_USER_CATALOG),
        }
    }
}

fn catalog_path(variable: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { variable }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptyPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EmptyPath { variable } => {
                write!(f, "{variable} must name a tradeline file when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::EmptyPath { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
