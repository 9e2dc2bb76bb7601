//! Prometheus metrics for the operator console.
//!
//! - Log store metrics (entries appended by type, evictions, current size)
//! - Template metrics (renders, collection mutations)

use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, Encoder, IntCounter,
    IntCounterVec, IntGauge, TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "console";

lazy_static! {
    // ============================================================================
    // Log Store Metrics
    // ============================================================================

    /// Total log entries appended by type
    pub static ref LOG_ENTRIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_log_entries_total", METRIC_PREFIX),
        "Total log entries appended",
        &["type"]
    ).unwrap();

    /// Log entries evicted because the store was full
    pub static ref LOG_ENTRIES_EVICTED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_log_entries_evicted_total", METRIC_PREFIX),
        "Total log entries evicted from a full store"
    ).unwrap();

    /// Entries currently held by the log store; one store per process
    pub static ref LOG_STORE_SIZE: IntGauge = register_int_gauge!(
        format!("{}_log_store_size", METRIC_PREFIX),
        "Number of entries currently in the log store"
    ).unwrap();

    // ============================================================================
    // Template Metrics
    // ============================================================================

    /// Templates rendered against a client record
    pub static ref TEMPLATES_RENDERED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_templates_rendered_total", METRIC_PREFIX),
        "Total template renders"
    ).unwrap();

    /// Template collection mutations by operation
    pub static ref TEMPLATE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_template_operations_total", METRIC_PREFIX),
        "Total template collection mutations",
        &["operation"]
    ).unwrap();
}

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording template collection mutations
pub struct TemplateMetrics;

impl TemplateMetrics {
    pub fn record_added() {
        TEMPLATE_OPERATIONS_TOTAL.with_label_values(&["add"]).inc();
    }

    pub fn record_edited() {
        TEMPLATE_OPERATIONS_TOTAL.with_label_values(&["edit"]).inc();
    }

    pub fn record_deleted() {
        TEMPLATE_OPERATIONS_TOTAL.with_label_values(&["delete"]).inc();
    }
}
