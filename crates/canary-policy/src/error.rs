//! Error types for policy and identity construction

use canary_plan::PlanError;

/// Errors raised while building policies or emitting the identity
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Bucket identifier was empty; the bucket ARN would be undefined
    #[error("bucket identifier is empty; caller must supply a realized bucket reference")]
    MissingBucket,

    /// Region was empty; the parameter-store ARN would be undefined
    #[error("region is empty")]
    MissingRegion,

    /// Account id was empty; the parameter-store ARN would be undefined
    #[error("account id is empty")]
    MissingAccountId,

    /// Plan-graph emission failed
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
}
