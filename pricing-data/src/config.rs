//! TOML pricing configuration.
//!
//! ```toml
//! tax_rate_percent = 18
//! currency_code = "INR"
//! subunit_factor = 100
//! ```
//!
//! Every key is optional; missing keys keep the [`PricingConfig`] defaults.
//! Unknown keys are an error.

use std::path::Path;

use pricing_core::{PricingConfig, PricingError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pricing configuration: {0}")]
    Invalid(#[from] PricingError),
}

/// Parses and validates a pricing configuration from TOML text.
pub fn parse_pricing_config(text: &str) -> Result<PricingConfig, ConfigError> {
    let config: PricingConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates a pricing configuration file.
pub fn load_pricing_config(path: &Path) -> Result<PricingConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_pricing_config(&text)?;
    info!(
        path = %path.display(),
        tax_rate_percent = %config.tax_rate_percent,
        currency = %config.currency_code,
        subunit_factor = config.subunit_factor,
        "loaded pricing configuration"
    );
    Ok(config)
}
