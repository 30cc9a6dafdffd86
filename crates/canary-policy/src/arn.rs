//! ARN construction helpers
//!
//! Fixed string templates for the resource patterns the authorization
//! policy is scoped to. Callers are expected to pass realized, non-empty
//! identifiers; emptiness is checked at the policy-builder boundary.

/// Log actions are global by platform requirement
pub const LOGS_ARN_PATTERN: &str = "arn:aws:logs:*:*:*";

/// ARN of the bucket itself
#[inline]
#[must_use]
pub fn bucket_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{bucket}")
}

/// ARN pattern covering every object in the bucket
#[inline]
#[must_use]
pub fn bucket_objects_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{bucket}/*")
}

/// Parameter-store path the canary may read its saved items from
///
/// Scoped to one application name and one environment.
#[inline]
#[must_use]
pub fn ssm_saved_items_arn(
    region: &str,
    account_id: &str,
    app_name: &str,
    environment: &str,
) -> String {
    format!(
        "arn:aws:ssm:{region}:{account_id}:parameter/{app_name}/{environment}/Canary/savedItems/*"
    )
}
