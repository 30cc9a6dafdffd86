//! Collaborator contracts
//!
//! Interfaces only; implementations live with the provider SDKs outside
//! this workspace.

use crate::escalation::EscalationPolicyIds;

/// A realized storage-bucket reference
///
/// Must expose an identifier usable in ARN construction.
pub trait BucketRef {
    /// Bucket identifier
    fn bucket_id(&self) -> &str;
}

/// The external paging backend
pub trait PagingHandler {
    /// Notification-topic identifier the failure alarm should fire into,
    /// given the escalation policies the paging service was provisioned
    /// with
    fn notification_topic(&self, prefix: &str, escalation: &EscalationPolicyIds) -> String;
}

/// Cross-deployment remote state reader
pub trait RemoteState {
    /// Read a named value, if present
    fn get(&self, key: &str) -> Option<String>;
}
