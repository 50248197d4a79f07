//! Counters for request handling and batch processing.
//!
//! Metrics are recorded through the `metrics` facade; no exporter is wired
//! up, so recording is a no-op unless a recorder is installed.

use metrics::{counter, describe_counter};

// === Metric Name Constants ===

/// HTTP requests handled counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Client validation failures counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "validation_failures_total";
/// Batch records processed counter metric name.
pub const METRIC_RECORDS_PROCESSED: &str = "records_processed_total";
/// Batch records skipped counter metric name.
pub const METRIC_RECORDS_SKIPPED: &str = "records_skipped_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total HTTP requests handled");
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total client input validation failures (HTTP 400 responses)"
    );
    describe_counter!(
        METRIC_RECORDS_PROCESSED,
        "Total batch records successfully processed"
    );
    describe_counter!(
        METRIC_RECORDS_SKIPPED,
        "Total batch records skipped as invalid"
    );
}

/// Record a handled HTTP request for the given route.
pub fn record_request(route: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "route" => route).increment(1);
}

/// Record a client validation failure.
pub fn record_validation_failure() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}

/// Record processed and skipped counts for one batch call.
pub fn record_batch(processed: u64, skipped: u64) {
    if processed > 0 {
        counter!(METRIC_RECORDS_PROCESSED).increment(processed);
    }
    if skipped > 0 {
        counter!(METRIC_RECORDS_SKIPPED).increment(skipped);
    }
}
