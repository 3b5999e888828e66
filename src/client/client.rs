//! Main client implementation.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::config::SitegenConfig;
use crate::error::SitegenError;
use crate::observability::{Logger, SitegenMetrics, Tracer};
use crate::services::{GenerationService, GenerationServiceImpl, UploadService, UploadServiceImpl};
use crate::transport::HttpTransport;

use super::builder::SitegenClientBuilder;
use super::traits::SitegenClient;

/// Implementation of the site-generation client.
///
/// Provides access to the generation and upload services through a unified
/// interface. Services are lazily initialized on first access.
///
/// # Example
///
/// ```no_run
/// use sitegen_client::{SitegenClient, SitegenClientImpl};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SitegenClientImpl::builder()
///     .base_url("https://sitegen.example.com")?
///     .build()?;
///
/// let generation = client.generation();
/// # Ok(())
/// # }
/// ```
pub struct SitegenClientImpl {
    config: SitegenConfig,
    transport: Arc<dyn HttpTransport>,

    // Lazy-initialized services
    generation_service: OnceCell<GenerationServiceImpl>,
    upload_service: OnceCell<UploadServiceImpl>,

    // Observability
    logger: Arc<dyn Logger>,
    tracer: Arc<dyn Tracer>,
    metrics: Arc<SitegenMetrics>,
}

impl SitegenClientImpl {
    /// Creates a new client builder.
    pub fn builder() -> SitegenClientBuilder {
        SitegenClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// Reads configuration from:
    /// - `SITEGEN_BASE_URL` (required)
    /// - `SITEGEN_TIMEOUT_SECS` (optional)
    /// - `SITEGEN_CONNECT_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self, SitegenError> {
        let config = SitegenConfig::from_env()?;
        Self::new(config)
    }

    /// Creates a client from a configuration object.
    pub fn new(config: SitegenConfig) -> Result<Self, SitegenError> {
        SitegenClientBuilder::from_config(config).build()
    }

    /// Creates a client from pre-constructed parts (used by the builder).
    pub(super) fn from_parts(
        config: SitegenConfig,
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn Logger>,
        tracer: Arc<dyn Tracer>,
        metrics: Arc<SitegenMetrics>,
    ) -> Result<Self, SitegenError> {
        Ok(Self {
            config,
            transport,
            generation_service: OnceCell::new(),
            upload_service: OnceCell::new(),
            logger,
            tracer,
            metrics,
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &SitegenConfig {
        &self.config
    }
}

impl SitegenClient for SitegenClientImpl {
    fn generation(&self) -> &dyn GenerationService {
        self.generation_service.get_or_init(|| {
            GenerationServiceImpl::new(
                &self.config,
                Arc::clone(&self.transport),
                Arc::clone(&self.logger),
                Arc::clone(&self.tracer),
                Arc::clone(&self.metrics),
            )
        })
    }

    fn upload(&self) -> &dyn UploadService {
        self.upload_service.get_or_init(|| {
            UploadServiceImpl::new(
                &self.config,
                Arc::clone(&self.transport),
                Arc::clone(&self.logger),
                Arc::clone(&self.tracer),
                Arc::clone(&self.metrics),
            )
        })
    }
}

impl std::fmt::Debug for SitegenClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SitegenClientImpl")
            .field("base_url", &self.config.base_url.as_str())
            .finish()
    }
}

/// Create a client from configuration.
pub fn create_client(config: SitegenConfig) -> Result<Arc<dyn SitegenClient>, SitegenError> {
    let client = SitegenClientImpl::new(config)?;
    Ok(Arc::new(client))
}

/// Create a client from environment variables.
pub fn create_client_from_env() -> Result<Arc<dyn SitegenClient>, SitegenError> {
    let config = SitegenConfig::from_env()?;
    create_client(config)
}
