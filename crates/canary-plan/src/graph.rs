//! Plan graph builder and its sealed validated form
//!
//! [`PlanGraph`] accumulates resource declarations and explicit depends-on
//! edges during a single composition pass. [`ValidatedPlan`] can only be
//! constructed through [`PlanGraph::validate`], so every plan reaching the
//! external provisioning engine has passed the acyclicity check and carries
//! a hash binding the validation to the graph structure.

use indexmap::IndexMap;
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graphmap::DiGraphMap;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::error::PlanError;
use crate::node::{ResourceId, ResourceKind, ResourceNode};

/// Mutable builder for a resource-dependency plan
///
/// Owned by exactly one composition pass; there is no shared state across
/// passes. Edges are oriented dependency → dependent so a topological sort
/// yields a valid creation order.
#[derive(Debug, Default)]
pub struct PlanGraph {
    next_id: u64,
    nodes: IndexMap<ResourceId, ResourceNode>,
    names: HashSet<String>,
    edges: DiGraphMap<ResourceId, ()>,
}

impl PlanGraph {
    /// Create an empty plan
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource with serializable attributes
    ///
    /// # Errors
    /// Returns [`PlanError::DuplicateName`] if a resource with the same
    /// name already exists, or [`PlanError::Serialization`] if the
    /// attributes cannot be serialized.
    pub fn add_resource<A>(
        &mut self,
        kind: ResourceKind,
        name: impl Into<String>,
        attributes: &A,
    ) -> Result<ResourceId, PlanError>
    where
        A: serde::Serialize,
    {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return Err(PlanError::DuplicateName(name));
        }

        let id = ResourceId::new(self.next_id);
        self.next_id += 1;

        let node = ResourceNode {
            id,
            kind,
            name,
            attributes: serde_json::to_value(attributes)?,
        };
        self.nodes.insert(id, node);
        self.edges.add_node(id);
        Ok(id)
    }

    /// Declare that `dependent` must be created after `dependency`
    ///
    /// # Errors
    /// Returns [`PlanError::SelfLoop`] for a self-dependency,
    /// [`PlanError::NodeNotFound`] if either id is unknown, or
    /// [`PlanError::CycleDetected`] if the edge would make the graph cyclic
    /// (the edge is removed again before returning).
    pub fn depends_on(
        &mut self,
        dependent: ResourceId,
        dependency: ResourceId,
    ) -> Result<(), PlanError> {
        if dependent == dependency {
            return Err(PlanError::SelfLoop(dependent));
        }
        if !self.nodes.contains_key(&dependent) {
            return Err(PlanError::NodeNotFound(dependent));
        }
        if !self.nodes.contains_key(&dependency) {
            return Err(PlanError::NodeNotFound(dependency));
        }

        self.edges.add_edge(dependency, dependent, ());
        if is_cyclic_directed(&self.edges) {
            self.edges.remove_edge(dependency, dependent);
            return Err(PlanError::CycleDetected {
                from: dependent,
                to: dependency,
            });
        }
        Ok(())
    }

    /// Number of declared resources
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of dependency edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Look up a declared resource by exact name
    #[inline]
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ResourceNode> {
        self.nodes.values().find(|n| n.name == name)
    }

    /// Validate the full graph and seal it into an immutable plan
    ///
    /// Consumes the builder; after this point nothing can be added or
    /// mutated. The returned plan records resources in declaration order,
    /// the edge list, a creation order, and the plan hash.
    ///
    /// # Errors
    /// Returns [`PlanError::CycleDetected`] if the dependency graph is not
    /// acyclic.
    pub fn validate(self) -> Result<ValidatedPlan, PlanError> {
        let order = match toposort(&self.edges, None) {
            Ok(order) => order,
            Err(cycle) => {
                let id = cycle.node_id();
                return Err(PlanError::CycleDetected { from: id, to: id });
            }
        };

        let mut edges: Vec<(ResourceId, ResourceId)> = self
            .edges
            .all_edges()
            .map(|(dependency, dependent, ())| (dependent, dependency))
            .collect();
        edges.sort_unstable();

        let hash = compute_plan_hash(&self.nodes, &edges);

        Ok(ValidatedPlan {
            nodes: self.nodes,
            edges,
            creation_order: order,
            hash,
        })
    }
}

/// Sealed, immutable resource plan
///
/// Has no public constructor: the only way to obtain one is
/// [`PlanGraph::validate`], so holding a `ValidatedPlan` is proof the
/// graph is acyclic.
#[derive(Debug, serde::Serialize)]
pub struct ValidatedPlan {
    nodes: IndexMap<ResourceId, ResourceNode>,
    edges: Vec<(ResourceId, ResourceId)>,
    creation_order: Vec<ResourceId>,
    #[serde(serialize_with = "hex_hash")]
    hash: [u8; 32],
}

fn hex_hash<S>(hash: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&hex::encode(hash))
}

impl ValidatedPlan {
    /// Resources in declaration order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.values()
    }

    /// Resource declaration by id
    #[inline]
    #[must_use]
    pub fn node(&self, id: ResourceId) -> Option<&ResourceNode> {
        self.nodes.get(&id)
    }

    /// Resource declaration by exact name
    #[inline]
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ResourceNode> {
        self.nodes.values().find(|n| n.name == name)
    }

    /// Dependency edges as `(dependent, dependency)` pairs, sorted
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[(ResourceId, ResourceId)] {
        &self.edges
    }

    /// A valid creation order (dependencies before dependents)
    #[inline]
    #[must_use]
    pub fn creation_order(&self) -> &[ResourceId] {
        &self.creation_order
    }

    /// Number of resources in the plan
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of dependency edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Hash binding this validation to the graph structure
    #[inline]
    #[must_use]
    pub const fn hash(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Hex form of the plan hash
    #[inline]
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// Compute the hash over sorted nodes and edges
///
/// Deterministic for identical structure regardless of insertion order of
/// edges.
fn compute_plan_hash(
    nodes: &IndexMap<ResourceId, ResourceNode>,
    edges: &[(ResourceId, ResourceId)],
) -> [u8; 32] {
    let mut hasher = Sha256::new();

    let mut ids: Vec<_> = nodes.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        let node = &nodes[&id];
        hasher.update(id.index().to_le_bytes());
        hasher.update(node.kind.type_name().as_bytes());
        hasher.update([0]);
        hasher.update(node.name.as_bytes());
        hasher.update([0]);
        // serde_json orders object keys, so this encoding is stable
        hasher.update(node.attributes.to_string().as_bytes());
        hasher.update([0]);
    }

    for (dependent, dependency) in edges {
        hasher.update(dependent.index().to_le_bytes());
        hasher.update(dependency.index().to_le_bytes());
    }

    hasher.finalize().into()
}
