//! Readiness store module
//!
//! Point lookups of readiness records by their `(name, date)` key.
//!
//! # Overview
//!
//! - `ReadinessStore` - the lookup contract the checker depends on
//! - `DynamoDbStore` - DynamoDB-backed store used in production
//! - `MemoryStore` - in-process store that counts lookups
//!
//! Stores are read-only. Records are written by upstream producers.

mod dynamodb;
mod memory;

pub use dynamodb::{connect, DynamoDbStore};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::{ReadinessRecord, RecordKey};
use async_trait::async_trait;

// ============================================================================
// Store Trait
// ============================================================================

/// Key-value store holding readiness records
#[async_trait]
pub trait ReadinessStore: Send + Sync {
    /// Fetch the item stored under `key`, if any
    ///
    /// Exactly one point lookup. No scans, no pagination, no retries
    /// beyond what the underlying client does on its own.
    async fn get_record(&self, key: &RecordKey) -> Result<Option<ReadinessRecord>>;
}
