//! The composition pass
//!
//! One synchronous, single-pass graph construction: identity → bundle →
//! check → alarm, with explicit dependency edges. Either the full plan is
//! emitted, or construction fails and nothing is emitted.

use std::collections::BTreeMap;

use canary_plan::{PlanGraph, ResourceKind, ValidatedPlan};
use canary_policy::{emit_execution_identity, execution_policy, trust_policy, PolicyScope};
use serde::Serialize;

use crate::alarm::failure_alarm_attributes;
use crate::alerting::AlertingPlan;
use crate::bundle::bundle_source;
use crate::canary::CanaryAttributes;
use crate::error::ComposeError;
use crate::spec::CanarySpec;

/// Deployment context a composition pass runs under
///
/// Mirrors the already-validated inbound configuration object; the
/// composer treats it as an opaque source of truth.
#[derive(Debug, Clone)]
pub struct ComposeContext<'a> {
    /// Application name, used in the parameter-store path
    pub app_name: &'a str,
    /// Deployment environment, used in the parameter-store path
    pub environment: &'a str,
    /// Resource name prefix
    pub prefix: &'a str,
    /// Whether this is a non-production deployment
    pub is_dev: bool,
    /// Tags propagated onto taggable resources
    pub tags: &'a BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct ArchiveAttributes<'a> {
    r#type: &'static str,
    source_dir: String,
    output_path: &'a str,
}

/// Compose the full resource plan for one canary
///
/// The single environment-conditional branch in the system is the
/// [`AlertingPlan`] resolution at entry; everything after it is
/// unconditional.
///
/// # Errors
/// Fails fast on constraint violations (missing alert target in
/// production, empty identifiers) and propagates archiving and plan
/// errors unmodified. No partial plan is ever returned.
pub fn compose(spec: &CanarySpec, ctx: &ComposeContext<'_>) -> Result<ValidatedPlan, ComposeError> {
    tracing::info!(canary = %spec.name, env = ctx.environment, "composing canary plan");

    let alerting = AlertingPlan::resolve(ctx.is_dev, spec.alert_target.as_ref())?;
    tracing::debug!(alerting = alerting.is_enabled(), "resolved alerting plan");

    let trust = trust_policy();
    let authorization = execution_policy(&PolicyScope {
        region: &spec.region,
        account_id: &spec.account_id,
        bucket: &spec.bucket,
        app_name: ctx.app_name,
        environment: ctx.environment,
    })?;

    let mut plan = PlanGraph::new();

    let identity = emit_execution_identity(
        &mut plan,
        ctx.prefix,
        spec.name.as_str(),
        &trust,
        &authorization,
    )?;

    let bundle = bundle_source(&spec.source)?;
    let archive = plan.add_resource(
        ResourceKind::ArchiveFile,
        format!("{}-synthetic-zip-file", spec.name),
        &ArchiveAttributes {
            r#type: "zip",
            source_dir: spec.source.display().to_string(),
            output_path: bundle.output_path(),
        },
    )?;

    let canary = plan.add_resource(
        ResourceKind::SyntheticsCanary,
        spec.name.as_str(),
        &CanaryAttributes::new(
            spec.name.as_str(),
            &spec.bucket,
            &identity.role_name,
            bundle.output_path(),
        ),
    )?;
    plan.depends_on(canary, identity.role)?;
    plan.depends_on(canary, identity.attachment)?;
    plan.depends_on(canary, archive)?;

    let alarm_attrs = failure_alarm_attributes(spec.name.as_str(), &alerting, ctx.tags);
    let alarm = plan.add_resource(
        ResourceKind::MetricAlarm,
        alarm_attrs.alarm_name.clone(),
        &alarm_attrs,
    )?;
    plan.depends_on(alarm, canary)?;

    let validated = plan.validate()?;
    tracing::info!(
        nodes = validated.node_count(),
        edges = validated.edge_count(),
        hash = %validated.hash_hex(),
        "canary plan validated"
    );
    Ok(validated)
}
