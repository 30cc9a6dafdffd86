//! Stack assembly
//!
//! Derives the canary spec from configuration and collaborators, decides
//! the alert target once, and drives the composition pass.

use canary_compose::{compose, AlertTarget, CanarySpec, ComposeContext, ValidatedPlan};

use crate::collaborators::{BucketRef, PagingHandler, RemoteState};
use crate::config::StackConfig;
use crate::error::StackError;
use crate::escalation::EscalationPolicyIds;

/// Region and account the stack deploys into
///
/// Supplied by the caller from provider data sources.
#[derive(Debug, Clone)]
pub struct DeploymentTarget {
    /// Deployment region
    pub region: String,
    /// Account id
    pub account_id: String,
}

/// Decide the alert target for this deployment
///
/// Non-production skips alerting entirely; remote state is never touched.
/// Production reads the escalation policy ids and asks the paging backend
/// for its notification topic.
///
/// # Errors
/// Returns [`StackError::MissingEscalationPolicy`] when production remote
/// state lacks a required id.
pub fn resolve_alert_target(
    config: &StackConfig,
    paging: &dyn PagingHandler,
    remote_state: &dyn RemoteState,
) -> Result<Option<AlertTarget>, StackError> {
    if config.is_dev {
        tracing::debug!("non-production deployment; alerting skipped");
        return Ok(None);
    }

    let escalation = EscalationPolicyIds::read(remote_state)?;
    let topic = paging.notification_topic(&config.prefix, &escalation);
    tracing::debug!(topic = %topic, "resolved paging target");
    Ok(Some(AlertTarget::new(topic)))
}

/// Assemble and validate the full canary plan for one stack
///
/// # Errors
/// Propagates alerting resolution and composition failures; no partial
/// plan is returned.
pub fn compose_stack(
    config: &StackConfig,
    target: &DeploymentTarget,
    bucket: &dyn BucketRef,
    paging: &dyn PagingHandler,
    remote_state: &dyn RemoteState,
) -> Result<ValidatedPlan, StackError> {
    let alert_target = resolve_alert_target(config, paging, remote_state)?;

    let spec = CanarySpec::new(
        &target.region,
        &target.account_id,
        bucket.bucket_id(),
        alert_target,
        config.canary.source.clone(),
        &config.canary_name(),
    )?;

    let ctx = ComposeContext {
        app_name: &config.name,
        environment: &config.environment,
        prefix: &config.prefix,
        is_dev: config.is_dev,
        tags: &config.tags,
    };
    Ok(compose(&spec, &ctx)?)
}
