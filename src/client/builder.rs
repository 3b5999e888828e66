//! Builder for creating client instances.

use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::{LogLevel, SitegenConfig};
use crate::error::{ConfigurationError, SitegenError};
use crate::observability::{create_default_stack, Logger, SitegenMetrics, Tracer};
use crate::transport::{HttpTransport, ReqwestTransport};

use super::client::SitegenClientImpl;

/// Builder for creating a [`SitegenClientImpl`] instance.
///
/// Provides a fluent API for configuring and constructing a client.
///
/// # Example
///
/// ```no_run
/// use sitegen_client::SitegenClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SitegenClientBuilder::new()
///     .base_url("https://sitegen.example.com")?
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SitegenClientBuilder {
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    log_level: Option<LogLevel>,

    // Injectable dependencies for testing
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Arc<dyn Logger>>,
    tracer: Option<Arc<dyn Tracer>>,
    metrics: Option<Arc<SitegenMetrics>>,
}

impl SitegenClientBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            connect_timeout: None,
            log_level: None,
            transport: None,
            logger: None,
            tracer: None,
            metrics: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: SitegenConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            timeout: Some(config.timeout),
            connect_timeout: Some(config.connect_timeout),
            log_level: Some(config.log_level),
            transport: None,
            logger: None,
            tracer: None,
            metrics: None,
        }
    }

    /// Sets the base URL from a string.
    pub fn base_url(mut self, url: &str) -> Result<Self, SitegenError> {
        self.base_url = Some(Url::parse(url)?);
        Ok(self)
    }

    /// Sets the base URL from an already-parsed [`Url`].
    pub fn base_url_parsed(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Sets a custom HTTP transport (for testing).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom logger (for testing).
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sets a custom tracer (for testing).
    pub fn tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Sets a custom metrics wrapper (for testing).
    pub fn metrics(mut self, metrics: Arc<SitegenMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no base URL was provided and `SITEGEN_BASE_URL` is not set
    /// - a configuration value is invalid
    /// - the HTTP transport could not be created
    pub fn build(self) -> Result<SitegenClientImpl, SitegenError> {
        // Resolve the base URL (order: explicit -> SITEGEN_BASE_URL)
        let base_url = match self.base_url {
            Some(url) => url,
            None => {
                let from_env = std::env::var("SITEGEN_BASE_URL")
                    .map_err(|_| ConfigurationError::MissingBaseUrl)?;
                Url::parse(&from_env)?
            }
        };

        let mut config_builder = SitegenConfig::builder().base_url_parsed(base_url);
        if let Some(timeout) = self.timeout {
            config_builder = config_builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            config_builder = config_builder.connect_timeout(connect_timeout);
        }
        if let Some(level) = self.log_level {
            config_builder = config_builder.log_level(level);
        }
        let config = config_builder.build()?;

        // Create transport
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                ReqwestTransport::new(config.timeout, config.connect_timeout)
                    .map_err(SitegenError::Transport)?,
            ),
        };

        // Create observability components
        let (default_logger, default_tracer, default_metrics) = create_default_stack("sitegen");
        let logger = self.logger.unwrap_or(default_logger);
        let tracer = self.tracer.unwrap_or(default_tracer);
        let metrics = self.metrics.unwrap_or(default_metrics);

        logger.info(
            "Sitegen client initialized",
            serde_json::json!({
                "base_url": config.base_url.as_str(),
                "timeout_secs": config.timeout.as_secs(),
            }),
        );

        SitegenClientImpl::from_parts(config, transport, logger, tracer, metrics)
    }
}

impl Default for SitegenClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
