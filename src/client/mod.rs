//! Client interface and factory functions.

mod builder;
#[allow(clippy::module_inception)]
mod client;
mod traits;

pub use builder::SitegenClientBuilder;
pub use client::{create_client, create_client_from_env, SitegenClientImpl};
pub use traits::SitegenClient;
