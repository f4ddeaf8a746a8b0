//! # Pool Configuration
//!
//! Construction-time configuration, loadable from TOML once at startup.
//! Runtime behavior never re-reads configuration: a pool's capacity is fixed
//! for its lifetime.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pool::DEFAULT_CAPACITY;

/// Errors that can occur while loading a pool configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("invalid pool config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A pool cannot hold zero entities.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for an update pool.
///
/// # Example
///
/// ```rust,ignore
/// let config = PoolConfig::from_toml_str(r#"
///     capacity = 512
///     trace_cycles = true
/// "#)?;
/// let pool: UpdatePool<Particle> = UpdatePool::with_config(&config);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of live entities. Fixed for the pool's lifetime.
    pub capacity: usize,
    /// Emit a `tracing` event per completed cycle.
    pub trace_cycles: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            trace_cycles: false,
        }
    }
}

impl PoolConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::ZeroCapacity`] for a capacity of zero.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file from disk and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus the
    /// same errors as [`PoolConfig::from_toml_str`].
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks invariants config files can violate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] for a capacity of zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
