//! Configuration types for the site-generation client.

use std::time::Duration;
use url::Url;

use crate::error::{ConfigurationError, SitegenError};

/// Default request timeout (120 seconds).
///
/// The client imposes no timeouts of its own beyond what the transport is
/// configured with; a transport timeout surfaces as a transport error.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Log level for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Error level - only errors.
    Error,
    /// Warning level - errors and warnings.
    Warn,
    /// Info level - general information.
    #[default]
    Info,
    /// Debug level - detailed information.
    Debug,
    /// Trace level - very detailed information.
    Trace,
}

/// Configuration for the site-generation client.
#[derive(Clone, Debug)]
pub struct SitegenConfig {
    /// Base URL of the generation service (required).
    pub base_url: Url,
    /// Default timeout for requests.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Enable tracing.
    pub enable_tracing: bool,
    /// Enable metrics.
    pub enable_metrics: bool,
    /// Log level.
    pub log_level: LogLevel,
}

impl SitegenConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SitegenConfigBuilder {
        SitegenConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `SITEGEN_BASE_URL` (required)
    /// - `SITEGEN_TIMEOUT_SECS` (optional)
    /// - `SITEGEN_CONNECT_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self, SitegenError> {
        let base_url = std::env::var("SITEGEN_BASE_URL")
            .map_err(|_| ConfigurationError::MissingBaseUrl)?;

        let timeout_secs: u64 = std::env::var("SITEGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let connect_timeout_secs: u64 = std::env::var("SITEGEN_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Self::builder()
            .base_url(&base_url)?
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
    }
}

/// Builder for [`SitegenConfig`].
#[derive(Default)]
pub struct SitegenConfigBuilder {
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    enable_tracing: Option<bool>,
    enable_metrics: Option<bool>,
    log_level: Option<LogLevel>,
}

impl SitegenConfigBuilder {
    /// Set the base URL of the generation service.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, SitegenError> {
        self.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Set the base URL from an already-parsed [`Url`].
    pub fn base_url_parsed(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enable or disable tracing.
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = Some(enable);
        self
    }

    /// Enable or disable metrics.
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = Some(enable);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SitegenConfig, SitegenError> {
        let base_url = self.base_url
            .ok_or(ConfigurationError::MissingBaseUrl)?;

        Ok(SitegenConfig {
            base_url,
            timeout: self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            enable_tracing: self.enable_tracing.unwrap_or(true),
            enable_metrics: self.enable_metrics.unwrap_or(true),
            log_level: self.log_level.unwrap_or_default(),
        })
    }
}
