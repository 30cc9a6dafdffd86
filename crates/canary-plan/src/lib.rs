//! Canary Plan Graph
//!
//! Resource-dependency substrate for the canary provisioning composer.
//!
//! # Core Concepts
//!
//! - [`ResourceNode`]: a typed resource declaration with an exact name and
//!   serialized attributes
//! - [`PlanGraph`]: mutable builder holding nodes and explicit depends-on
//!   edges, rejecting self-loops and cycles at insertion time
//! - [`ValidatedPlan`]: sealed, immutable output of [`PlanGraph::validate`],
//!   the only form handed to an external provisioning engine
//!
//! # Example
//!
//! ```rust,ignore
//! use canary_plan::{PlanGraph, ResourceKind};
//!
//! let mut plan = PlanGraph::new();
//! let role = plan.add_resource(ResourceKind::IamRole, "acme-web-ExecutionRole", &attrs)?;
//! let policy = plan.add_resource(ResourceKind::IamPolicy, "acme-web-ExecutionPolicy", &attrs)?;
//! let attach = plan.add_resource(ResourceKind::IamRolePolicyAttachment, "acme-web-attach", &attrs)?;
//! plan.depends_on(attach, role)?;
//! plan.depends_on(attach, policy)?;
//! let validated = plan.validate()?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod graph;
mod node;

pub use error::PlanError;
pub use graph::{PlanGraph, ValidatedPlan};
pub use node::{ResourceId, ResourceKind, ResourceNode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
