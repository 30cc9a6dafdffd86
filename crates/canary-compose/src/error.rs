//! Error types for canary composition
//!
//! Constraint violations are fatal at construction time; collaborator
//! failures (archiving, plan emission) are propagated unmodified. Retry
//! and backoff belong to the external provisioning engine.

use std::path::PathBuf;

use canary_plan::PlanError;
use canary_policy::PolicyError;

/// Errors raised during the composition pass
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Canary name exceeds the platform limit after lowercasing
    #[error("canary name '{name}' is {length} characters; platform limit is 21")]
    NameTooLong {
        /// Lowercased name that failed validation
        name: String,
        /// Character count after lowercasing
        length: usize,
    },

    /// Source bundle path does not exist
    #[error("canary source path does not exist: {0}")]
    SourceMissing(PathBuf),

    /// Source bundle path exists but is not a directory
    #[error("canary source path is not a directory: {0}")]
    SourceNotADirectory(PathBuf),

    /// Reading the source directory failed
    #[error("failed to read canary source under {path}: {source}")]
    SourceRead {
        /// Path being read when the failure occurred
        path: PathBuf,
        /// Underlying io error
        source: std::io::Error,
    },

    /// Production environment with no alert target supplied
    ///
    /// Production silence on canary failure is the one bug this system
    /// cannot tolerate, so this is a configuration error, never a no-op.
    #[error("production deployment requires an alert target")]
    MissingAlertTarget,

    /// Policy construction failed
    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Plan emission or validation failed
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
}
