//! Environment-sourced configuration, read once at startup.

use mail::SmtpConfig;
use std::env;
use std::fs;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },

    #[error("TEMPLATES directory '{path}' is not usable: {details}")]
    InvalidTemplatesDir { path: String, details: String },

    #[error("Both TOKEN and SMTP_HOST are set; configure exactly one transport")]
    AmbiguousTransport,

    #[error("Neither TOKEN nor SMTP_HOST is set; configure exactly one transport")]
    NoTransportConfigured,
}

/// Application environment, from `APP_ENV`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Server bind configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// The bind address as "host:port".
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reads `HOST` (default 0.0.0.0) and `PORT` (default 8080).
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }
}

/// Active outbound transport. Exactly one variant runs per process.
#[derive(Clone, Debug)]
pub enum TransportSettings {
    /// Transactional-email HTTP API with a static bearer token.
    Api { token: String },
    /// Authenticated SMTP relay.
    Smtp(SmtpConfig),
}

impl TransportSettings {
    /// Infer the variant from which credentials are present.
    ///
    /// `TOKEN` selects the API transport; `SMTP_HOST` (together with the
    /// remaining `SMTP_*` variables, all required then) selects the
    /// relay. Setting both or neither is a startup error.
    fn from_env() -> Result<Self, ConfigError> {
        let token = env::var("TOKEN").ok();
        let smtp_host = env::var("SMTP_HOST").ok();

        match (token, smtp_host) {
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousTransport),
            (None, None) => Err(ConfigError::NoTransportConfigured),
            (Some(token), None) => Ok(TransportSettings::Api { token }),
            (None, Some(host)) => {
                let port = env_required("SMTP_PORT")?.parse().map_err(|e| {
                    ConfigError::ParseError {
                        key: "SMTP_PORT".to_string(),
                        details: format!("{}", e),
                    }
                })?;

                Ok(TransportSettings::Smtp(SmtpConfig {
                    host,
                    port,
                    username: env_required("SMTP_USER")?,
                    password: env_required("SMTP_PASSWORD")?,
                }))
            }
        }
    }
}

/// Runtime configuration resolved from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    pub templates_dir: PathBuf,
    pub transport: TransportSettings,
}

impl Config {
    /// Load and validate the full configuration. Any failure here is
    /// fatal at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig::from_env()?;
        let environment = Environment::from_env();
        let templates_dir = templates_dir_from_env()?;
        let transport = TransportSettings::from_env()?;

        Ok(Self {
            server,
            environment,
            templates_dir,
            transport,
        })
    }
}

/// `TEMPLATES` must point at an existing directory.
fn templates_dir_from_env() -> Result<PathBuf, ConfigError> {
    let path = env_required("TEMPLATES")?;

    let metadata = fs::metadata(&path).map_err(|e| ConfigError::InvalidTemplatesDir {
        path: path.clone(),
        details: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(ConfigError::InvalidTemplatesDir {
            path,
            details: "not a directory".to_string(),
        });
    }

    Ok(PathBuf::from(path))
}

/// Helper to load an environment variable with a default value
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load an environment variable or return an error
fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
