//! Fixed-capacity hash table with separate chaining and string keys.
//!
//! Variables:
//!   buckets : Vec<Option<Vec<Entry<V>>>>  - slot array, length C; a chain is
//!                                           allocated on first insert
//!   len     : usize                       - entries stored (shadowed
//!                                           duplicates included)
//!   C       : usize                       - capacity, fixed at construction
//!
//! Equations:
//!   v(ch)          = utf16(ch) - 96               ('a' = 1 .. 'z' = 26)
//!   h_0            = 0
//!   h_{i+1}        = (31 * h_i + v(key[i])) mod C  for i < min(|key|, 100)
//!   index(key)     = h_n                           (Horner's rule, in [0, C))
//!
//!   set(k,v):  chain[index(k)].push((k,v))            O(1)
//!   get(k):    first e in chain[index(k)] with e.k == k  O(chain length)
//!   keys():    scan chains 0..C in order, skip keys already emitted
//!   values():  same scan, skip values already emitted (by equality)
//!
//! There is no resize: C never changes, so chains grow with load factor
//! len / C.

use std::collections::HashSet;

use log::{debug, trace};

use crate::config::{DuplicateKeyPolicy, HashTableConfig, DEFAULT_CAPACITY};
use crate::error::HashTableError;

pub const PRIME: i128 = 31;
pub const MAX_HASHED_UNITS: usize = 100;
const CHAR_OFFSET: i128 = 96;

/// Polynomial string hash reduced into `[0, capacity)`.
///
/// Only the first 100 UTF-16 code units of `key` are considered. Characters
/// below `'a'` contribute negative values; the Euclidean remainder keeps the
/// running total non-negative.
///
/// # Panics
///
/// Panics if `capacity` is 0. [`HashTable`] constructors reject that
/// capacity with [`HashTableError::InvalidConfig`] before hashing anything.
pub fn polynomial_hash(key: &str, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be positive");
    let modulus = capacity as i128;
    let mut total: i128 = 0;
    for unit in key.encode_utf16().take(MAX_HASHED_UNITS) {
        let value = i128::from(unit) - CHAR_OFFSET;
        total = (total * PRIME + value).rem_euclid(modulus);
    }
    total as usize
}

/// Entry in a bucket chain
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

#[derive(Debug, Clone)]
pub struct HashTable<V> {
    buckets: Vec<Option<Vec<Entry<V>>>>,
    len: usize,
    duplicate_keys: DuplicateKeyPolicy,
}

impl<V> HashTable<V> {
    /// Create a table with `capacity` buckets and the default
    /// (append) duplicate-key policy.
    pub fn new(capacity: usize) -> Result<Self, HashTableError> {
        Self::with_config(&HashTableConfig::with_capacity(capacity))
    }

    pub fn with_config(config: &HashTableConfig) -> Result<Self, HashTableError> {
        config.validate()?;
        let table = Self::build(config.capacity, config.duplicate_keys)?;
        debug!(
            "hash table created with {} buckets, duplicate keys: {:?}",
            config.capacity, config.duplicate_keys
        );
        Ok(table)
    }

    /// Allocate the bucket array up front; a capacity the allocator refuses
    /// is reported as `InvalidConfig`.
    fn build(capacity: usize, duplicate_keys: DuplicateKeyPolicy) -> Result<Self, HashTableError> {
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| HashTableError::InvalidConfig { capacity })?;
        buckets.resize_with(capacity, || None);
        Ok(Self { buckets, len: 0, duplicate_keys })
    }

    /// Bucket index for `key` under this table's capacity.
    pub fn hash(&self, key: &str) -> usize {
        polynomial_hash(key, self.buckets.len())
    }

    /// Store `value` under `key`.
    ///
    /// With [`DuplicateKeyPolicy::Append`] an existing key gets a second
    /// entry behind the first, which keeps answering `get`. With
    /// [`DuplicateKeyPolicy::Overwrite`] the stored value is replaced in
    /// place.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let index = self.hash(&key);
        trace!("set `{}` -> bucket {}", key, index);

        let policy = self.duplicate_keys;
        let chain = self.buckets[index].get_or_insert_with(Vec::new);
        if let Some(existing) = chain.iter_mut().find(|e| e.key == key) {
            match policy {
                DuplicateKeyPolicy::Overwrite => {
                    debug!("overwriting `{}` in bucket {}", key, index);
                    existing.value = value;
                    return;
                }
                DuplicateKeyPolicy::Append => {
                    debug!("`{}` already in bucket {}, appending shadowed entry", key, index);
                }
            }
        }
        chain.push(Entry { key, value });
        self.len += 1;
    }

    /// First value stored under `key` in chain order.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.hash(key);
        trace!("get `{}` -> bucket {}", key, index);
        self.buckets[index]
            .as_ref()?
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Every stored entry, buckets in index order, chains oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .filter_map(Option::as_ref)
            .flat_map(|chain| chain.iter().map(|e| (e.key.as_str(), &e.value)))
    }

    /// Distinct keys in scan order.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|(k, _)| k)
            .filter(|k| seen.insert(*k))
            .collect()
    }

    /// Read-only view of one chain. `None` if the bucket was never used or
    /// `index` is out of range.
    pub fn bucket(&self, index: usize) -> Option<&[Entry<V>]> {
        self.buckets.get(index)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    pub fn duplicate_key_policy(&self) -> DuplicateKeyPolicy {
        self.duplicate_keys
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }
}

impl<V: PartialEq> HashTable<V> {
    /// Distinct values in scan order. Two keys holding equal values
    /// contribute a single element.
    pub fn values(&self) -> Vec<&V> {
        let mut out: Vec<&V> = Vec::new();
        for (_, value) in self.iter() {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self {
            buckets: std::iter::repeat_with(|| None).take(DEFAULT_CAPACITY).collect(),
            len: 0,
            duplicate_keys: DuplicateKeyPolicy::default(),
        }
    }
}
