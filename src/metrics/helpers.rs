//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{NOTIFICATIONS_FAILED_TOTAL, NOTIFICATIONS_SENT_TOTAL, NOTIFICATIONS_SKIPPED_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording notification outcomes
pub struct NotificationMetrics;

impl NotificationMetrics {
    pub fn record_sent(event: &str) {
        NOTIFICATIONS_SENT_TOTAL.with_label_values(&[event]).inc();
    }

    pub fn record_failed(event: &str) {
        NOTIFICATIONS_FAILED_TOTAL.with_label_values(&[event]).inc();
    }

    pub fn record_skipped(event: &str) {
        NOTIFICATIONS_SKIPPED_TOTAL.with_label_values(&[event]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_encode() {
        NotificationMetrics::record_sent("metrics_test");
        NotificationMetrics::record_failed("metrics_test");
        NotificationMetrics::record_skipped("metrics_test");

        assert!(NOTIFICATIONS_SENT_TOTAL.with_label_values(&["metrics_test"]).get() >= 1);

        let text = encode_metrics().unwrap();
        assert!(text.contains("group_notify_sent_total"));
        assert!(text.contains("group_notify_skipped_total"));
    }
}
