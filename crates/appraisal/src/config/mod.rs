use std::env;
use std::net::{IpAddr, SocketAddr};

/// Deployment stage the portal runs in. Development defaults to verbose
/// logging; test and production default to `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    const fn default_log_level(self) -> &'static str {
        match self {
            AppEnvironment::Development => "debug",
            AppEnvironment::Test | AppEnvironment::Production => "info",
        }
    }
}

/// Process configuration for the appraisal portal, read from `APPRAISAL_*`
/// environment variables (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// `APPRAISAL_ENV`, `APPRAISAL_HOST`, `APPRAISAL_PORT`, `APPRAISAL_LOG`.
    /// Everything has a sensible local default; only a malformed port is an
    /// error at load time.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("APPRAISAL_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let host = env::var("APPRAISAL_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APPRAISAL_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let log_level = env::var("APPRAISAL_LOG")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// HTTP bind address for the service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` is accepted as an alias for the loopback address; anything
    /// else must be a literal IPv4 or IPv6 address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filtering for the tracing subscriber.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APPRAISAL_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
    #[error("APPRAISAL_HOST '{host}' is not an IP address or 'localhost'")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
}
