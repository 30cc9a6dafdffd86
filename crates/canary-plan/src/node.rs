//! Resource declaration nodes
//!
//! Provides [`ResourceId`], [`ResourceKind`], and [`ResourceNode`] — the
//! typed declarations a plan graph is made of. Nodes carry the exact
//! resource name the external engine correlates on, plus attributes in
//! serialized form.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of a resource within a single plan
///
/// Allocated sequentially by [`crate::PlanGraph`]; ids are meaningful only
/// within the plan that minted them. Cheap to copy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Create an id from a raw index
    #[inline]
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Raw index value
    #[inline]
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Kind of cloud resource a node declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Execution role assumable by the canary runtime
    IamRole,
    /// Least-privilege authorization policy
    IamPolicy,
    /// Attachment binding a policy to a role
    IamRolePolicyAttachment,
    /// Archived code bundle produced from a source directory
    ArchiveFile,
    /// The synthetic-monitoring check itself
    SyntheticsCanary,
    /// Threshold alarm over the canary's failure metric
    MetricAlarm,
}

impl ResourceKind {
    /// Provider-facing type string for this kind
    #[inline]
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::IamRole => "aws_iam_role",
            Self::IamPolicy => "aws_iam_policy",
            Self::IamRolePolicyAttachment => "aws_iam_role_policy_attachment",
            Self::ArchiveFile => "archive_file",
            Self::SyntheticsCanary => "aws_synthetics_canary",
            Self::MetricAlarm => "aws_cloudwatch_metric_alarm",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single resource declaration
///
/// Immutable once inserted into a plan. `name` is the exact string the
/// external provisioning engine uses to correlate this declaration across
/// runs; `attributes` is the serialized attribute object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    /// Plan-local identifier
    pub id: ResourceId,
    /// Resource kind
    pub kind: ResourceKind,
    /// Exact resource name
    pub name: String,
    /// Serialized resource attributes
    pub attributes: serde_json::Value,
}
