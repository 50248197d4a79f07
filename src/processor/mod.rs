//! Batch record validation and transformation.
//!
//! This module handles:
//! - Presence validation of raw data records
//! - Value transformation and threshold categorization
//! - A running count of records processed per processor instance

pub mod records;

use serde::Serialize;
use tracing::{info, warn};

pub use records::{Category, DataRecord, ProcessedRecord};

use records::VALUE_MULTIPLIER;

/// Batch processor holding the running processed-record count.
///
/// One instance owns one counter; `process_batch` takes `&mut self`, so
/// sharing an instance across threads requires external synchronization.
#[derive(Debug, Default)]
pub struct DataProcessor {
    processed_count: u64,
}

/// Processing statistics snapshot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessorStats {
    /// Records processed across all batches on this instance.
    pub total_processed: u64,
    /// Always "active".
    pub status: &'static str,
}

impl DataProcessor {
    /// Create a processor with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that a record carries all required fields.
    ///
    /// Presence only; field contents are not inspected.
    pub fn validate(&self, record: &DataRecord) -> bool {
        record.id.is_some() && record.timestamp.is_some() && record.value.is_some()
    }

    /// Process a batch of records, skipping invalid ones.
    ///
    /// Invalid records are dropped with a warning and never fail the batch.
    /// Output preserves the input order of the records that pass validation,
    /// and the running counter grows by one per processed record.
    pub fn process_batch(&mut self, batch: &[DataRecord]) -> Vec<ProcessedRecord> {
        let mut processed = Vec::with_capacity(batch.len());
        let mut skipped = 0u64;

        for record in batch {
            if !self.validate(record) {
                warn!(?record, "Invalid record skipped");
                skipped += 1;
                continue;
            }
            if let Some(transformed) = Self::transform(record) {
                processed.push(transformed);
                self.processed_count += 1;
            }
        }

        info!("Processed {} records", processed.len());
        crate::metrics::record_batch(processed.len() as u64, skipped);
        processed
    }

    /// Transform a single validated record.
    ///
    /// Returns `None` for records missing a field, so callers cannot bypass
    /// validation.
    fn transform(record: &DataRecord) -> Option<ProcessedRecord> {
        let id = record.id?;
        let timestamp = record.timestamp.clone()?;
        let value = record.value?;

        Some(ProcessedRecord {
            id,
            timestamp,
            original_value: value,
            processed_value: value * VALUE_MULTIPLIER,
            status: "processed",
            category: Category::from_value(value),
        })
    }

    /// Snapshot of the cumulative processing statistics.
    pub fn statistics(&self) -> ProcessorStats {
        ProcessorStats {
            total_processed: self.processed_count,
            status: "active",
        }
    }
}
