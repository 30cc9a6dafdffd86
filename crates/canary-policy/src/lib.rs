//! Canary Policy & Identity Builder
//!
//! Derives the minimal trust and authorization policies a canary execution
//! identity needs, and binds role, policy, and attachment into plan nodes
//! with explicit dependency edges.
//!
//! # Core Concepts
//!
//! - [`PolicyDocument`] / [`Statement`]: IAM document model serializing to
//!   the AWS JSON shape
//! - [`trust_policy`]: constant two-principal assume-role document
//! - [`execution_policy`]: four-statement least-privilege document scoped
//!   to one bucket, region, and account
//! - [`emit_execution_identity`]: emits role + policy + attachment nodes,
//!   the attachment depending on both

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod arn;
mod builder;
mod document;
mod error;
mod identity;

pub use arn::{bucket_arn, bucket_objects_arn, ssm_saved_items_arn, LOGS_ARN_PATTERN};
pub use builder::{execution_policy, trust_policy, PolicyScope};
pub use document::{Effect, PolicyDocument, Principal, Statement, POLICY_VERSION};
pub use error::PolicyError;
pub use identity::{emit_execution_identity, ExecutionIdentity};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
