//! Processed record entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of processing a structured input
///
/// Records are content-addressed by checksum and never mutated after
/// creation; the processor's cache evicts them only on an explicit clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// The input as received
    original: Value,
    /// When the record was built
    processed_at: DateTime<Utc>,
    /// Hex digest of the canonical serialization, also the cache key
    checksum: String,
    /// Byte size of the canonical serialization
    size: usize,
    /// Number of top-level fields in the input
    fields_count: usize,
}

impl ProcessedRecord {
    pub fn new(original: Value, checksum: impl Into<String>, size: usize, fields_count: usize) -> Self {
        Self {
            original,
            processed_at: Utc::now(),
            checksum: checksum.into(),
            size,
            fields_count,
        }
    }

    pub fn original(&self) -> &Value {
        &self.original
    }

    pub fn processed_at(&self) -> DateTime<Utc> {
        self.processed_at
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fields_count(&self) -> usize {
        self.fields_count
    }
}
