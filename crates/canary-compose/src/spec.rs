//! Validated composer inputs
//!
//! [`CanaryName`] enforces the platform's 21-character limit at
//! construction time, after lowercasing; a [`CanarySpec`] therefore never
//! holds an invalid name. The source path is validated later, by the
//! archiving step.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ComposeError;

/// Hard platform limit on managed check names
pub const MAX_CANARY_NAME_LEN: usize = 21;

/// Lowercased, length-checked canary name
///
/// The managed-check platform demands names of 21 characters or less.
/// Construction is the only place the limit is checked; holding a
/// `CanaryName` is proof the constraint is satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanaryName(String);

impl CanaryName {
    /// Lowercase and validate a raw name
    ///
    /// # Errors
    /// Returns [`ComposeError::NameTooLong`] when the lowercased name
    /// exceeds [`MAX_CANARY_NAME_LEN`] characters.
    pub fn new(raw: &str) -> Result<Self, ComposeError> {
        let lowered = raw.to_lowercase();
        let length = lowered.chars().count();
        if length > MAX_CANARY_NAME_LEN {
            return Err(ComposeError::NameTooLong {
                name: lowered,
                length,
            });
        }
        Ok(Self(lowered))
    }

    /// The validated, lowercased name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CanaryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Downstream paging target for the failure alarm
///
/// Wraps the notification-topic identifier exposed by the paging handler
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertTarget(String);

impl AlertTarget {
    /// Wrap a notification-topic identifier
    #[inline]
    #[must_use]
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self(topic_arn.into())
    }

    /// The notification-topic identifier
    #[inline]
    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.0
    }
}

/// Inputs for one canary composition pass
///
/// Root of the entity model: every emitted resource is derived from and
/// exclusively owned by the pass that consumes this spec.
#[derive(Debug, Clone)]
pub struct CanarySpec {
    /// Deployment region
    pub region: String,
    /// Account owning the resources
    pub account_id: String,
    /// Identifier of the artifact bucket
    pub bucket: String,
    /// Paging target; `None` outside production
    pub alert_target: Option<AlertTarget>,
    /// Directory holding the canary check source
    pub source: PathBuf,
    /// Validated canary name
    pub name: CanaryName,
}

impl CanarySpec {
    /// Build a spec, validating the name
    ///
    /// # Errors
    /// Returns [`ComposeError::NameTooLong`] for names over the platform
    /// limit.
    pub fn new(
        region: impl Into<String>,
        account_id: impl Into<String>,
        bucket: impl Into<String>,
        alert_target: Option<AlertTarget>,
        source: impl Into<PathBuf>,
        name: &str,
    ) -> Result<Self, ComposeError> {
        Ok(Self {
            region: region.into(),
            account_id: account_id.into(),
            bucket: bucket.into(),
            alert_target,
            source: source.into(),
            name: CanaryName::new(name)?,
        })
    }
}
