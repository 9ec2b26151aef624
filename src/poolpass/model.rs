use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier of a pool, supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(String);

impl PoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PoolId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub area: String,
    #[serde(deserialize_with = "coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub lng: f64,
    // Artwork reference for the passport stamp
    #[serde(default)]
    pub stamp: Option<String>,
}

impl Pool {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: PoolId::from(id),
            name: name.to_string(),
            suburb: String::new(),
            location: String::new(),
            area: String::new(),
            lat: 0.0,
            lng: 0.0,
            stamp: None,
        }
    }
}

/// Catalog files carry coordinates either as JSON numbers or numeric strings.
fn coordinate<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate: {:?}", s))),
    }
}

/// Evidence that a pool was visited.
///
/// Records written by this crate always have `done` set; `date` is the
/// canonical `YYYY-MM-DD` store form, or `None` for entries migrated from the
/// legacy boolean encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedRecord {
    pub done: bool,
    pub date: Option<String>,
}

impl VisitedRecord {
    pub fn stamped(date: Option<String>) -> Self {
        Self { done: true, date }
    }
}

pub type VisitedSet = BTreeMap<PoolId, VisitedRecord>;
