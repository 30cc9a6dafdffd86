//! Execution identity emission
//!
//! Allocates the role, the policy, and the attachment as one unit of plan
//! nodes. The attachment carries explicit dependency edges to both prior
//! allocations; ordering is the external engine's job, the edges only
//! declare the constraint.

use canary_plan::{PlanGraph, ResourceId, ResourceKind};
use serde::Serialize;

use crate::document::PolicyDocument;
use crate::error::PolicyError;

/// Handles to the emitted identity nodes
#[derive(Debug, Clone)]
pub struct ExecutionIdentity {
    /// Role node
    pub role: ResourceId,
    /// Policy node
    pub policy: ResourceId,
    /// Attachment node
    pub attachment: ResourceId,
    /// Exact role name, for downstream references
    pub role_name: String,
}

#[derive(Debug, Serialize)]
struct RoleAttributes<'a> {
    name: &'a str,
    assume_role_policy: &'a PolicyDocument,
}

#[derive(Debug, Serialize)]
struct PolicyAttributes<'a> {
    name: &'a str,
    policy: &'a PolicyDocument,
}

#[derive(Debug, Serialize)]
struct AttachmentAttributes<'a> {
    role: &'a str,
    policy: &'a str,
}

/// Emit role, policy, and attachment nodes for one canary
///
/// Names follow the fixed templates `{prefix}-{name}-ExecutionRole` and
/// `{prefix}-{name}-ExecutionPolicy`; the external engine correlates on
/// them bit-exactly.
///
/// # Errors
/// Propagates [`canary_plan::PlanError`] if a node name collides or an
/// edge is invalid.
pub fn emit_execution_identity(
    plan: &mut PlanGraph,
    prefix: &str,
    name: &str,
    trust: &PolicyDocument,
    authorization: &PolicyDocument,
) -> Result<ExecutionIdentity, PolicyError> {
    let role_name = format!("{prefix}-{name}-ExecutionRole");
    let policy_name = format!("{prefix}-{name}-ExecutionPolicy");

    let role = plan.add_resource(
        ResourceKind::IamRole,
        role_name.clone(),
        &RoleAttributes {
            name: &role_name,
            assume_role_policy: trust,
        },
    )?;

    let policy = plan.add_resource(
        ResourceKind::IamPolicy,
        policy_name.clone(),
        &PolicyAttributes {
            name: &policy_name,
            policy: authorization,
        },
    )?;

    let attachment = plan.add_resource(
        ResourceKind::IamRolePolicyAttachment,
        format!("{name}-execution-role-policy-attachment"),
        &AttachmentAttributes {
            role: &role_name,
            policy: &policy_name,
        },
    )?;
    plan.depends_on(attachment, role)?;
    plan.depends_on(attachment, policy)?;

    Ok(ExecutionIdentity {
        role,
        policy,
        attachment,
        role_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{execution_policy, trust_policy, PolicyScope};
    use pretty_assertions::assert_eq;

    fn emit(plan: &mut PlanGraph) -> ExecutionIdentity {
        let trust = trust_policy();
        let authorization = execution_policy(&PolicyScope {
            region: "us-east-1",
            account_id: "123",
            bucket: "b1",
            app_name: "WebApp",
            environment: "Prod",
        })
        .unwrap();
        emit_execution_identity(plan, "ACME", "web", &trust, &authorization).unwrap()
    }

    #[test]
    fn emits_three_nodes_with_fixed_names() {
        let mut plan = PlanGraph::new();
        let identity = emit(&mut plan);
        assert_eq!(plan.node_count(), 3);
        assert_eq!(identity.role_name, "ACME-web-ExecutionRole");
        assert!(plan.find_by_name("ACME-web-ExecutionRole").is_some());
        assert!(plan.find_by_name("ACME-web-ExecutionPolicy").is_some());
        assert!(plan
            .find_by_name("web-execution-role-policy-attachment")
            .is_some());
    }

    #[test]
    fn attachment_depends_on_role_and_policy() {
        let mut plan = PlanGraph::new();
        let identity = emit(&mut plan);
        let validated = plan.validate().unwrap();
        let edges = validated.edges();
        assert!(edges.contains(&(identity.attachment, identity.role)));
        assert!(edges.contains(&(identity.attachment, identity.policy)));
        assert_eq!(validated.edge_count(), 2);
    }

    #[test]
    fn role_node_embeds_trust_document() {
        let mut plan = PlanGraph::new();
        let identity = emit(&mut plan);
        let validated = plan.validate().unwrap();
        let role = validated.node(identity.role).unwrap();
        let doc = &role.attributes["assume_role_policy"];
        assert_eq!(doc["Version"], "2012-10-17");
        assert_eq!(doc["Statement"][0]["Action"][0], "sts:AssumeRole");
    }
}
