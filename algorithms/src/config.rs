//! Hash table configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below, so `{}` is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, HashTableError};

pub const DEFAULT_CAPACITY: usize = 17;

/// What `set` does when the key is already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Append a second entry; `get` keeps returning the first one.
    #[default]
    Append,
    /// Replace the stored value in place.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashTableConfig {
    pub capacity: usize,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            duplicate_keys: DuplicateKeyPolicy::default(),
        }
    }
}

impl HashTableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, ..Self::default() }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: HashTableConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), HashTableError> {
        if self.capacity < 1 {
            return Err(HashTableError::InvalidConfig { capacity: self.capacity });
        }
        Ok(())
    }
}
