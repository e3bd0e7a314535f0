//! Reporter configuration system.
//!
//! TOML-based configuration for the presence bridge. All sections use
//! `serde(default)` so partial configs work out of the box; a missing
//! config file is created with documented defaults on first run.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PresenceSettings, ReporterConfig};

use reporter_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<ReporterConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
