//! Core pieces shared by the Skycast service crates.
//!
//! Provides configuration loading, the typed error hierarchy, and logging
//! initialization.

pub mod config;
pub mod error;

pub use config::{Config, ServerConfig, ValidationResult};
pub use error::{AppError, ConfigError, StoreError};

use anyhow::Result;

/// Initialize the service core.
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skycast core initialized");
    Ok(())
}
