//! Error types for plan-graph construction and validation

use crate::node::ResourceId;

/// Errors raised while building or validating a plan graph
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A resource was declared to depend on itself
    #[error("resource {0} cannot depend on itself")]
    SelfLoop(ResourceId),

    /// Adding the edge would make the dependency graph cyclic
    #[error("dependency edge {from} -> {to} introduces a cycle")]
    CycleDetected {
        /// Dependent resource
        from: ResourceId,
        /// Dependency resource
        to: ResourceId,
    },

    /// Referenced resource id is not part of this plan
    #[error("resource {0} not found in plan")]
    NodeNotFound(ResourceId),

    /// Two resources were declared with the same name
    ///
    /// Resource names must be bit-exact and unique so the external engine
    /// can correlate re-application across runs.
    #[error("duplicate resource name: {0}")]
    DuplicateName(String),

    /// Attribute serialization failed
    #[error("attribute serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
