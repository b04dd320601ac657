//! Data processing domain
//!
//! Canonical serialization and the content-addressed processed record.

mod canonical;
mod record;

pub use canonical::canonical_json;
pub use record::ProcessedRecord;
