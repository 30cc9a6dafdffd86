//! Canary Stack Assembly
//!
//! The thin layer between an already-validated configuration object, the
//! external collaborators (storage bucket, paging backend, remote state),
//! and the composition pass. Provider SDKs and the provisioning engine
//! itself stay outside; this crate only decides the alerting plan, derives
//! the canary spec, and drives [`canary_compose::compose`].

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod collaborators;
mod config;
mod error;
mod escalation;
mod stack;
mod telemetry;

pub use collaborators::{BucketRef, PagingHandler, RemoteState};
pub use config::{CanarySettings, StackConfig};
pub use error::StackError;
pub use escalation::{
    EscalationPolicyIds, CRITICAL_POLICY_KEY, NON_CRITICAL_POLICY_KEY,
};
pub use stack::{compose_stack, resolve_alert_target, DeploymentTarget};
pub use telemetry::init_tracing;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
