//! Data processing service with a content-addressed cache

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::{canonical_json, DomainError, ProcessedRecord};

/// Transforms structured input into an annotated record, memoized by the
/// checksum of its canonical serialization
///
/// Identical payloads collapse onto the same cache entry regardless of key
/// order, so reprocessing a payload overwrites the entry with an equivalent
/// record.
#[derive(Debug, Default)]
pub struct DataProcessor {
    cache: RwLock<HashMap<String, ProcessedRecord>>,
}

impl DataProcessor {
    /// Create a processor with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a JSON object and cache the result under its checksum
    ///
    /// The HTTP layer rejects non-object bodies before this is called, so
    /// the input is always a validated top-level mapping.
    pub fn process(&self, data: &Map<String, Value>) -> Result<ProcessedRecord, DomainError> {
        let original = Value::Object(data.clone());
        let canonical = canonical_json(&original);
        let checksum = hex::encode(Sha256::digest(canonical.as_bytes()));

        let record =
            ProcessedRecord::new(original, checksum.clone(), canonical.len(), data.len());

        let mut cache = self.cache.write().map_err(lock_error)?;
        cache.insert(checksum, record.clone());

        Ok(record)
    }

    /// Get a cached record by checksum
    pub fn get_cached(&self, checksum: &str) -> Result<Option<ProcessedRecord>, DomainError> {
        let cache = self.cache.read().map_err(lock_error)?;
        Ok(cache.get(checksum).cloned())
    }

    /// Empty the cache, returning the number of entries removed
    pub fn clear_cache(&self) -> Result<usize, DomainError> {
        let mut cache = self.cache.write().map_err(lock_error)?;
        let count = cache.len();
        cache.clear();
        Ok(count)
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> DomainError {
    DomainError::internal(format!("Failed to acquire cache lock: {}", e))
}
