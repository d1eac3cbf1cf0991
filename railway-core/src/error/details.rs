//! Structured error details

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable mapping of detail keys to arbitrary JSON values.
///
/// Keys are kept sorted, so two detail maps built in different insertion
/// orders compare and render identically. Cloning shares the underlying map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(Arc<BTreeMap<String, Value>>);

impl Details {
    pub fn new(map: BTreeMap<String, Value>) -> Self {
        Self(Arc::new(map))
    }

    /// Copy of this map with one more entry
    pub(crate) fn with_entry(&self, key: String, value: Value) -> Self {
        let mut map = (*self.0).clone();
        map.insert(key, value);
        Self::new(map)
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }
}

impl Deref for Details {
    type Target = BTreeMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> FromIterator<(K, V)> for Details
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Value>> for Details {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::new(map)
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (key, value) in self.0.iter() {
            write!(f, " {}: {}", key, render_value(value))?;
        }
        if !self.0.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("}")
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Details {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Self::new)
    }
}
