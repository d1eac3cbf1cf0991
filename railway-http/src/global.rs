//! Process-wide status code table
//!
//! Starts out as [`StatusCodeMappings::default`]. Overrides are meant to be
//! applied during startup, before requests are served; readers take a shared
//! lock and never observe a half-applied [`configure`].

use crate::config::MappingConfig;
use crate::error::MappingResult;
use crate::mappings::StatusCodeMappings;
use http::StatusCode;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use railway_core::ErrorType;
use tracing::info;

static MAPPINGS: Lazy<RwLock<StatusCodeMappings>> =
    Lazy::new(|| RwLock::new(StatusCodeMappings::default()));

/// Override the status code used for `error_type`
pub fn map_status_code(error_type: ErrorType, status: StatusCode) {
    MAPPINGS.write().map(error_type, status);
    info!(
        error_type = %error_type,
        status = status.as_u16(),
        "Overriding status code mapping"
    );
}

/// Status code currently mapped for `error_type`
pub fn status_code_for(error_type: ErrorType) -> MappingResult<StatusCode> {
    MAPPINGS.read().status_for(error_type)
}

/// Copy of the current table
pub fn snapshot() -> StatusCodeMappings {
    MAPPINGS.read().clone()
}

/// Restore the conventional table
pub fn reset() {
    *MAPPINGS.write() = StatusCodeMappings::default();
    info!("Status code mappings reset to defaults");
}

/// Validate `config` and apply every entry at once.
///
/// Nothing is changed when validation fails.
pub fn configure(config: &MappingConfig) -> MappingResult<()> {
    config.validate()?;
    let mut mappings = MAPPINGS.write();
    let mut updated = mappings.clone();
    config.apply_to(&mut updated)?;
    *mappings = updated;
    drop(mappings);

    info!(
        entries = config.status_codes.len(),
        "Applied status code configuration"
    );
    Ok(())
}
