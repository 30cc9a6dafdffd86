//! Failure alarm attributes
//!
//! A 16-minute evaluation window (3 periods of 960 seconds) over the
//! canary's 5xx sample count, firing at the first sample. Missing data is
//! treated as not breaching, unconditionally.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::alerting::AlertingPlan;

/// Metric namespace the managed check publishes into
pub const ALARM_NAMESPACE: &str = "CloudWatchSynthetics";

/// Failure metric name
pub const FAILURE_METRIC: &str = "5xx";

/// Evaluation period, in seconds
pub const ALARM_PERIOD_SECONDS: u32 = 960;

/// Number of evaluation periods in the window
pub const ALARM_EVALUATION_PERIODS: u32 = 3;

/// Sample count at which the alarm fires
pub const ALARM_THRESHOLD: u32 = 1;

/// Fixed missing-data policy; never breaches on metric gaps
pub const MISSING_DATA_POLICY: &str = "notBreaching";

/// Attributes of the failure alarm resource
#[derive(Debug, Clone, Serialize)]
pub struct AlarmAttributes {
    /// Exact alarm name (`{canary}-SyntheticsFailed-Alarm`)
    pub alarm_name: String,
    /// Metric namespace
    pub namespace: &'static str,
    /// Metric name
    pub metric_name: &'static str,
    /// Dimensions keyed by canary name
    pub dimensions: BTreeMap<&'static str, String>,
    /// Evaluation period, seconds
    pub period: u32,
    /// Number of evaluation periods
    pub evaluation_periods: u32,
    /// Statistic over the window
    pub statistic: &'static str,
    /// Comparison against the threshold
    pub comparison_operator: &'static str,
    /// Firing threshold
    pub threshold: u32,
    /// Human-readable description
    pub alarm_description: String,
    /// Actions on insufficient data; always empty
    pub insufficient_data_actions: Vec<String>,
    /// Downstream actions on alarm; from the alerting plan
    pub alarm_actions: Vec<String>,
    /// Resource tags
    pub tags: BTreeMap<String, String>,
    /// Missing-data policy; always `notBreaching`
    pub treat_missing_data: &'static str,
}

/// Exact alarm name for a canary
#[inline]
#[must_use]
pub fn failure_alarm_name(canary_name: &str) -> String {
    format!("{canary_name}-SyntheticsFailed-Alarm")
}

/// Build failure-alarm attributes bound to one canary
#[must_use]
pub fn failure_alarm_attributes(
    canary_name: &str,
    alerting: &AlertingPlan,
    tags: &BTreeMap<String, String>,
) -> AlarmAttributes {
    AlarmAttributes {
        alarm_name: failure_alarm_name(canary_name),
        namespace: ALARM_NAMESPACE,
        metric_name: FAILURE_METRIC,
        dimensions: BTreeMap::from([("CanaryName", canary_name.to_string())]),
        period: ALARM_PERIOD_SECONDS,
        evaluation_periods: ALARM_EVALUATION_PERIODS,
        statistic: "SampleCount",
        comparison_operator: "GreaterThanOrEqualToThreshold",
        threshold: ALARM_THRESHOLD,
        alarm_description: format!("failed canary test: {canary_name}"),
        insufficient_data_actions: Vec::new(),
        alarm_actions: alerting.actions(),
        tags: tags.clone(),
        treat_missing_data: MISSING_DATA_POLICY,
    }
}
