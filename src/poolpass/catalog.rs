//! The pool catalog: an ordered, read-only list of pools.
//!
//! Catalog order is significant. It is the order of `list`, the meaning of a
//! selection index, and the tie-break when two stamps share a date.

use crate::error::{PassportError, Result};
use crate::model::{Pool, PoolId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/pools.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pools: Vec<Pool>,
}

impl Catalog {
    pub fn new(pools: Vec<Pool>) -> Result<Self> {
        let mut seen = HashSet::new();
        for pool in &pools {
            if !seen.insert(&pool.id) {
                return Err(PassportError::Catalog(format!(
                    "duplicate pool id '{}'",
                    pool.id
                )));
            }
        }
        Ok(Self { pools })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let pools: Vec<Pool> = serde_json::from_str(content)
            .map_err(|e| PassportError::Catalog(format!("invalid catalog: {}", e)))?;
        Self::new(pools)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(PassportError::Io)?;
        Self::from_json(&content)
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pool> {
        self.pools.get(index)
    }

    pub fn position(&self, id: &PoolId) -> Option<usize> {
        self.pools.iter().position(|p| &p.id == id)
    }
}
