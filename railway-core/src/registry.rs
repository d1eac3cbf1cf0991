//! Process-wide table of known error types
//!
//! The registry replaces runtime type discovery: every set of error types a
//! process wants to resolve by name (deserialization, configuration files)
//! is registered once at startup. The table keeps registration order and is
//! pre-seeded with [`BuiltIn`].

use crate::error::{RailwayError, RailwayResult};
use crate::error_type::{BuiltIn, ErrorType, ErrorTypeSet};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

struct Registry {
    ordered: Vec<ErrorType>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    fn seeded() -> Self {
        let mut registry = Self {
            ordered: Vec::with_capacity(BuiltIn::VARIANTS.len()),
            by_name: HashMap::with_capacity(BuiltIn::VARIANTS.len()),
        };
        for error_type in BuiltIn::VARIANTS {
            registry.push(*error_type);
        }
        registry
    }

    fn push(&mut self, error_type: ErrorType) {
        self.by_name.insert(error_type.name(), self.ordered.len());
        self.ordered.push(error_type);
    }

    fn conflict(&self, candidate: &ErrorType) -> Option<RailwayError> {
        let index = self.by_name.get(candidate.name())?;
        let existing = &self.ordered[*index];
        if existing.is_identical(candidate) {
            None
        } else {
            Some(RailwayError::DuplicateErrorType {
                name: candidate.name().to_string(),
                existing: existing.message().to_string(),
            })
        }
    }

    fn insert_all(&mut self, variants: &[ErrorType]) -> RailwayResult<usize> {
        for (position, candidate) in variants.iter().enumerate() {
            if let Some(err) = self.conflict(candidate) {
                return Err(err);
            }
            // Conflicts inside the incoming batch itself
            if variants[..position]
                .iter()
                .any(|earlier| earlier == candidate && !earlier.is_identical(candidate))
            {
                return Err(RailwayError::DuplicateErrorType {
                    name: candidate.name().to_string(),
                    existing: candidate.message().to_string(),
                });
            }
        }

        let mut added = 0;
        for candidate in variants {
            if !self.by_name.contains_key(candidate.name()) {
                self.push(*candidate);
                added += 1;
            }
        }
        Ok(added)
    }
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::seeded()));

/// Register every variant of the set `K`.
///
/// Variants already present with the same default message are skipped. If
/// any name is already taken by a different definition nothing is added.
pub fn register<K: ErrorTypeSet>() -> RailwayResult<()> {
    let added = REGISTRY.write().insert_all(K::VARIANTS)?;
    debug!(set = K::NAME, added, "Registered error type set");
    Ok(())
}

/// Register a single error type.
pub fn register_type(error_type: ErrorType) -> RailwayResult<()> {
    let added = REGISTRY.write().insert_all(std::slice::from_ref(&error_type))?;
    if added > 0 {
        debug!(name = error_type.name(), "Registered error type");
    }
    Ok(())
}

/// Find a registered error type by name
pub fn lookup(name: &str) -> Option<ErrorType> {
    let registry = REGISTRY.read();
    registry
        .by_name
        .get(name)
        .map(|index| registry.ordered[*index])
}

/// Find a registered error type by name, failing for unknown names
pub fn resolve(name: &str) -> RailwayResult<ErrorType> {
    lookup(name).ok_or_else(|| RailwayError::UnknownErrorType {
        name: name.to_string(),
    })
}

/// Check whether a name is registered
pub fn is_registered(name: &str) -> bool {
    REGISTRY.read().by_name.contains_key(name)
}

/// All registered error types in registration order
pub fn all() -> Vec<ErrorType> {
    REGISTRY.read().ordered.clone()
}
