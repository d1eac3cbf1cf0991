//! Status code configuration loaded from TOML
//!
//! ```toml
//! [status_codes]
//! Failure = 400
//! PaymentDeclined = 402
//! ```
//!
//! Names are error type names and must be registered with
//! [`railway_core::registry`] before the configuration is validated.
//! Environment variables of the form `RAILWAY_STATUS_<NAME>` (name upper
//! cased, e.g. `RAILWAY_STATUS_NOTFOUND=410`) override file entries.

use crate::error::{MappingError, MappingResult};
use crate::mappings::StatusCodeMappings;
use http::StatusCode;
use railway_core::registry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Prefix of the environment variables overriding a status code
pub const ENV_PREFIX: &str = "RAILWAY_STATUS_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Error type name to numeric status code
    #[serde(default)]
    pub status_codes: BTreeMap<String, u16>,
}

impl MappingConfig {
    /// Parse a TOML document. The result is not validated yet.
    pub fn from_toml_str(contents: &str) -> MappingResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a TOML file, apply environment overrides and validate
    pub fn from_file<P: AsRef<Path>>(path: P) -> MappingResult<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| MappingError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env_overrides();
        config.validate()?;

        debug!(
            path = %path.as_ref().display(),
            entries = config.status_codes.len(),
            "Loaded status code configuration"
        );
        Ok(config)
    }

    /// Apply `RAILWAY_STATUS_<NAME>` overrides for every registered error type
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides read through `lookup`, keyed like the environment
    /// variables.
    ///
    /// Values that are not numbers are skipped with a warning.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for error_type in registry::all() {
            let key = env_key(error_type.name());
            let Some(raw) = lookup(&key) else {
                continue;
            };
            match raw.trim().parse::<u16>() {
                Ok(code) => {
                    self.status_codes.insert(error_type.name().to_string(), code);
                }
                Err(_) => {
                    warn!(key = %key, value = %raw, "Ignoring non-numeric status code override");
                }
            }
        }
    }

    /// Check that every name is a registered error type and every code is a
    /// valid status code
    pub fn validate(&self) -> MappingResult<()> {
        for (name, code) in &self.status_codes {
            if !registry::is_registered(name) {
                return Err(MappingError::UnknownErrorType { name: name.clone() });
            }
            parse_status(name, *code)?;
        }
        Ok(())
    }

    /// Write every entry into `mappings`
    pub fn apply_to(&self, mappings: &mut StatusCodeMappings) -> MappingResult<()> {
        for (name, code) in &self.status_codes {
            let error_type = registry::resolve(name)
                .map_err(|_| MappingError::UnknownErrorType { name: name.clone() })?;
            mappings.map(error_type, parse_status(name, *code)?);
        }
        Ok(())
    }

    /// The default table with this configuration applied
    pub fn to_mappings(&self) -> MappingResult<StatusCodeMappings> {
        self.validate()?;
        let mut mappings = StatusCodeMappings::default();
        self.apply_to(&mut mappings)?;
        Ok(mappings)
    }
}

fn env_key(name: &str) -> String {
    format!("{}{}", ENV_PREFIX, name.to_ascii_uppercase())
}

fn parse_status(name: &str, code: u16) -> MappingResult<StatusCode> {
    if !(100..=599).contains(&code) {
        return Err(MappingError::InvalidStatusCode {
            error_type: name.to_string(),
            code,
        });
    }
    StatusCode::from_u16(code).map_err(|_| MappingError::InvalidStatusCode {
        error_type: name.to_string(),
        code,
    })
}
