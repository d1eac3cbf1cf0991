//! Payload-free success marker

use crate::result::Result;
use futures::future::{ready, Ready};
use serde::de::IgnoredAny;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marks an operation that succeeded without producing a value.
///
/// Every instance is equal to every other. On the wire it is an empty map,
/// and any input deserializes back into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Success;

/// Result of an operation with no payload
pub type UnitResult = Result<Success>;

impl Success {
    pub const VALUE: Success = Success;

    /// An already completed future yielding the marker
    pub fn ready() -> Ready<Success> {
        ready(Success)
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Success")
    }
}

impl From<()> for Success {
    fn from(_: ()) -> Self {
        Success
    }
}

impl Serialize for Success {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

impl<'de> Deserialize<'de> for Success {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Success)
    }
}
