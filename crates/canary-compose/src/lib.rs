//! Canary Resource Composer
//!
//! Takes a small set of inputs (region, account, bucket, alert target,
//! source bundle path, name) and deterministically derives the
//! interdependent resource set for one synthetic-monitoring canary: an
//! execution identity, a least-privilege policy, a versioned code bundle,
//! the monitoring check, and a threshold alarm bound to it.
//!
//! The whole "execution" is a one-shot graph-construction pass; the output
//! is a [`canary_plan::ValidatedPlan`] consumed by an external
//! provisioning engine. Either the full plan is emitted or construction
//! fails and nothing is emitted.
//!
//! # Core Concepts
//!
//! - [`CanarySpec`] / [`CanaryName`]: validated inputs (names must fit the
//!   21-character platform limit after lowercasing)
//! - [`bundle_source`]: wraps a source directory into a freshly named
//!   archive declaration
//! - [`AlertingPlan`]: environment-conditional alerting, decided once at
//!   composition entry
//! - [`compose`]: the single linear Builder → Composer → Alarm pass

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod alarm;
mod alerting;
mod bundle;
mod canary;
mod composer;
mod error;
mod spec;

pub use alarm::{
    failure_alarm_attributes, failure_alarm_name, AlarmAttributes, ALARM_EVALUATION_PERIODS,
    ALARM_NAMESPACE, ALARM_PERIOD_SECONDS, ALARM_THRESHOLD, FAILURE_METRIC, MISSING_DATA_POLICY,
};
pub use alerting::AlertingPlan;
pub use bundle::{bundle_source, CodeBundle};
pub use canary::{CanaryAttributes, CANARY_HANDLER, CANARY_RUNTIME, CANARY_SCHEDULE};
pub use composer::{compose, ComposeContext};
pub use error::ComposeError;
pub use spec::{AlertTarget, CanaryName, CanarySpec, MAX_CANARY_NAME_LEN};

// The plan type callers hand to the provisioning engine
pub use canary_plan::ValidatedPlan;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
