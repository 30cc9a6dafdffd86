//! Trust and authorization policy builders
//!
//! `trust_policy` is a pure function of the fixed principal set.
//! `execution_policy` composes the four fixed statement templates,
//! substituting the bucket ARN and the parameter-store path, and refuses
//! empty identifiers so no statement can end up with an undefined ARN.

use crate::arn::{bucket_arn, bucket_objects_arn, ssm_saved_items_arn, LOGS_ARN_PATTERN};
use crate::document::{PolicyDocument, Statement};
use crate::error::PolicyError;

/// Service principals allowed to assume the canary execution identity
const TRUSTED_SERVICES: [&str; 2] = ["lambda.amazonaws.com", "synthetics.amazonaws.com"];

/// Identifiers the authorization policy is scoped to
#[derive(Debug, Clone)]
pub struct PolicyScope<'a> {
    /// Deployment region
    pub region: &'a str,
    /// Account owning the resources
    pub account_id: &'a str,
    /// Artifact bucket identifier
    pub bucket: &'a str,
    /// Application name used in the parameter-store path
    pub app_name: &'a str,
    /// Deployment environment used in the parameter-store path
    pub environment: &'a str,
}

/// Build the trust policy for the execution identity
///
/// Constant given the fixed principal set; there is no error path.
#[must_use]
pub fn trust_policy() -> PolicyDocument {
    PolicyDocument::new(vec![Statement::allow_principal(
        &["sts:AssumeRole"],
        &TRUSTED_SERVICES,
    )])
}

/// Build the least-privilege authorization policy
///
/// Four statements: global log writes, global metric/trace writes,
/// storage writes scoped to exactly the bucket and its objects, and
/// parameter reads scoped to the per-application saved-items path.
///
/// # Errors
/// Returns [`PolicyError::MissingBucket`], [`PolicyError::MissingRegion`],
/// or [`PolicyError::MissingAccountId`] when the corresponding identifier
/// is empty; an empty identifier would produce an undefined ARN.
pub fn execution_policy(scope: &PolicyScope<'_>) -> Result<PolicyDocument, PolicyError> {
    if scope.bucket.is_empty() {
        return Err(PolicyError::MissingBucket);
    }
    if scope.region.is_empty() {
        return Err(PolicyError::MissingRegion);
    }
    if scope.account_id.is_empty() {
        return Err(PolicyError::MissingAccountId);
    }

    Ok(PolicyDocument::new(vec![
        Statement::allow(
            &[
                "logs:CreateLogGroup",
                "logs:CreateLogStream",
                "logs:PutLogEvents",
            ],
            &[LOGS_ARN_PATTERN.to_string()],
        ),
        Statement::allow(
            &[
                "s3:ListAllMyBuckets",
                "cloudwatch:PutMetricData",
                "xray:PutTraceSegments",
            ],
            &["*".to_string()],
        ),
        Statement::allow(
            &["s3:PutObject", "s3:GetBucketLocation"],
            &[bucket_arn(scope.bucket), bucket_objects_arn(scope.bucket)],
        ),
        Statement::allow(
            &["ssm:GetParameter"],
            &[ssm_saved_items_arn(
                scope.region,
                scope.account_id,
                scope.app_name,
                scope.environment,
            )],
        ),
    ]))
}
