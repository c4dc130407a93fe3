// crates/adapter-contract-config/src/config.rs
// ============================================================================
// Module: Adapter Contract Configuration
// Description: Configuration loading and validation for the offline checker.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: adapter-contract-core, serde, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! An explicitly named file (flag or environment) must exist; the default
//! file name is optional and falls back to built-in defaults when absent.
//! Every section is optional and takes its defaults when omitted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use adapter_contract_core::AvailabilityZone;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::Level;
use tracing::debug;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "adapter-contract.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "ADAPTER_CONTRACT_CONFIG";
/// Maximum size of the configuration file in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum length of a full path.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of configured zones.
pub(crate) const MAX_ZONES: usize = 256;
/// Default per-file input limit.
pub(crate) const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;
/// Upper bound for the per-file input limit.
pub(crate) const MAX_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Offline checker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterContractConfig {
    /// Canonical zone list.
    #[serde(default)]
    pub zones: ZonesConfig,
    /// Input limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Logging defaults.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AdapterContractConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            debug!(path = %resolved.display(), "no config file found, using defaults");
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        let config = Self::from_bytes(&bytes)?;
        debug!(
            path = %resolved.display(),
            zones = config.zones.all.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parses and validates configuration from raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the contents are oversized, not UTF-8,
    /// malformed, or invalid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zones.validate()?;
        self.limits.validate()?;
        self.logging.validate()
    }
}

/// Zone list used when a report is validated without an explicit one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZonesConfig {
    /// Real availability zones in canonical order.
    #[serde(default)]
    pub all: Vec<AvailabilityZone>,
}

impl ZonesConfig {
    /// Validates the zone list.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.all.len() > MAX_ZONES {
            return Err(ConfigError::Invalid(format!(
                "zones.all may list at most {MAX_ZONES} zones"
            )));
        }
        let mut seen = BTreeSet::new();
        for zone in &self.all {
            if zone.as_str().trim().is_empty() {
                return Err(ConfigError::Invalid("zones.all entries must be non-empty".to_string()));
            }
            if zone.is_pseudo() {
                return Err(ConfigError::Invalid(format!(
                    "zones.all may not contain pseudo-zone {zone}"
                )));
            }
            if !seen.insert(zone) {
                return Err(ConfigError::Invalid(format!("zones.all lists {zone} more than once")));
            }
        }
        Ok(())
    }
}

/// Limits applied to input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum size of a single JSON input file.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl LimitsConfig {
    /// Validates input limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 || self.max_input_bytes > MAX_MAX_INPUT_BYTES {
            return Err(ConfigError::Invalid(format!(
                "limits.max_input_bytes must be between 1 and {MAX_MAX_INPUT_BYTES}"
            )));
        }
        Ok(())
    }
}

/// Log output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Single-line events.
    #[default]
    Compact,
    /// Events with full span context.
    Full,
}

/// Logging defaults; `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output layout.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Returns the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the level is not a tracing level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::Invalid(format!("logging.level {} is not a log level", self.level)))
    }

    /// Validates logging configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.level().map(|_| ())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// The flag reports whether the path was named explicitly.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Default for `limits.max_input_bytes`.
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

/// Default for `logging.level`.
fn default_log_level() -> String {
    "info".to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
