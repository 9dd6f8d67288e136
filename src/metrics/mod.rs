//! Prometheus metrics for group notifications.
//!
//! Counters are labelled by event name (`group_create`, `member_add`, ...).

mod helpers;

pub use helpers::{encode_metrics, NotificationMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "group_notify";

lazy_static! {
    /// Notifications accepted by the messaging core
    pub static ref NOTIFICATIONS_SENT_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_sent_total", METRIC_PREFIX),
        "Total group notifications handed to the messaging core",
        &["event"]
    ).unwrap();

    /// Notifications the messaging core refused or failed to take
    pub static ref NOTIFICATIONS_FAILED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_failed_total", METRIC_PREFIX),
        "Total group notifications whose send returned an error",
        &["event"]
    ).unwrap();

    /// Notifications skipped because there was nobody to notify
    pub static ref NOTIFICATIONS_SKIPPED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_skipped_total", METRIC_PREFIX),
        "Total group notifications skipped with no recipients",
        &["event"]
    ).unwrap();
}
