//! Batch record types and categorization.

use serde::{Deserialize, Serialize};

/// Multiplier applied to every valid record's value.
pub(crate) const VALUE_MULTIPLIER: f64 = 1.1;

/// Raw input record for batch processing.
///
/// Fields are optional so an absent field is representable in the type;
/// [`DataProcessor`](super::DataProcessor) requires all three to be present
/// before a record is transformed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataRecord {
    /// Record identifier.
    pub id: Option<i64>,

    /// Timestamp string; presence is required but the format is not checked.
    pub timestamp: Option<String>,

    /// Numeric value to transform and categorize.
    pub value: Option<f64>,
}

impl DataRecord {
    /// Create a complete record.
    pub fn new(id: i64, timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            id: Some(id),
            timestamp: Some(timestamp.into()),
            value: Some(value),
        }
    }
}

/// Classification label derived from a record's value via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Value <= 50.
    Low,
    /// 50 < value <= 100.
    Medium,
    /// Value > 100.
    High,
}

impl Category {
    /// Classify a value against the fixed thresholds.
    pub fn from_value(value: f64) -> Self {
        if value > 100.0 {
            Self::High
        } else if value > 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Output record produced from a validated [`DataRecord`].
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedRecord {
    /// Identifier carried over from the input record.
    pub id: i64,

    /// Timestamp carried over from the input record.
    pub timestamp: String,

    /// The input value, unchanged.
    pub original_value: f64,

    /// `original_value * 1.1`.
    pub processed_value: f64,

    /// Always "processed".
    pub status: &'static str,

    /// Threshold classification of the original value.
    pub category: Category,
}
