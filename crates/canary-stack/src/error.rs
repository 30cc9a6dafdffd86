//! Error types for stack assembly

use canary_compose::ComposeError;

/// Errors raised while assembling the stack
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    /// A required escalation policy id is absent from remote state
    ///
    /// Only reachable in production; non-production skips alerting before
    /// the lookup.
    #[error("escalation policy id '{key}' missing from remote state")]
    MissingEscalationPolicy {
        /// The absent remote-state key
        key: &'static str,
    },

    /// Composition failed
    #[error(transparent)]
    Compose(#[from] ComposeError),
}
