//! Environment-conditional alerting
//!
//! Alerting is decided exactly once, at composition entry, as an explicit
//! variant of the output type. Call sites take an [`AlertingPlan`], never
//! the environment flag, so the gated behavior cannot be forgotten at a
//! new call site.

use crate::error::ComposeError;
use crate::spec::AlertTarget;

/// Alerting decision for one composition pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertingPlan {
    /// Non-production: the alarm fires into the void
    Disabled,
    /// Production: exactly one downstream paging target
    Enabled {
        /// Notification-topic identifier of the paging target
        topic_arn: String,
    },
}

impl AlertingPlan {
    /// Decide the alerting plan from the environment flag and the target
    ///
    /// Non-production is always `Disabled`, even when a target was
    /// supplied. Production with no target is a configuration error;
    /// silently emitting an alarm with no downstream action is the one
    /// failure mode this system cannot tolerate.
    ///
    /// # Errors
    /// Returns [`ComposeError::MissingAlertTarget`] for production without
    /// a target.
    pub fn resolve(is_dev: bool, target: Option<&AlertTarget>) -> Result<Self, ComposeError> {
        if is_dev {
            return Ok(Self::Disabled);
        }
        match target {
            Some(target) => Ok(Self::Enabled {
                topic_arn: target.topic_arn().to_string(),
            }),
            None => Err(ComposeError::MissingAlertTarget),
        }
    }

    /// Alarm action list for this plan
    ///
    /// Empty when disabled, exactly one entry when enabled.
    #[inline]
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        match self {
            Self::Disabled => Vec::new(),
            Self::Enabled { topic_arn } => vec![topic_arn.clone()],
        }
    }

    /// Whether a downstream target will be paged
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}
