//! Resource bin-packing scorers.
//!
//! Both scorers favor the node whose utilization of one designated
//! dimension ends up highest after the pod lands ("pack tight"), the
//! opposite of a spread policy. They share one gate, one demand policy,
//! and one scoring routine; the two public types only differ in where
//! `used` and `available` come from:
//!
//! - [`ResourceBinPacking`] trusts the snapshot's precomputed requested
//!   totals and works for any dimension, built-in or extended.
//! - [`ScarceResourceBinPacking`] recomputes `used` from the node's bound
//!   pods and reads capacity from the extended-resource map only; it is
//!   meant to be registered solely for dimensions an operator has declared
//!   scarce (accelerators, licensed devices).

use tracing::debug;

use stowage_core::{PodResources, Quantity, ResourceName, effective_demand, requests_resource};
use stowage_snapshot::NodeSnapshot;

use crate::error::{PriorityError, PriorityResult};

/// Top of the score range. A node the pod would fill exactly scores this;
/// over-committed nodes can score past it, since the arithmetic is
/// deliberately unclamped.
pub const MAX_PRIORITY: i64 = 10;

/// One node's preference score for one pod.
///
/// Collected by the driver in node-input order; the priority stage never
/// sorts these itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HostPriority {
    pub node: String,
    pub score: i64,
}

/// `floor((used + demand) * MAX_PRIORITY / available)`, exact in `u128`.
///
/// No upper clamp: when `used + demand > available` the score exceeds
/// [`MAX_PRIORITY`]. Admission is the filter stage's job; scoring reports
/// over-commit as-is rather than hiding it behind a clamp.
fn utilization_score(used: Quantity, demand: Quantity, available: Quantity) -> i64 {
    let packed = used.value() as u128 + demand.value() as u128;
    let scaled = packed * MAX_PRIORITY as u128 / available.value() as u128;
    i64::try_from(scaled).unwrap_or(i64::MAX)
}

/// Shared post-gate scoring: demand, degenerate-capacity policy, math.
fn score_packed(
    node: &str,
    resource: &ResourceName,
    pod: &PodResources,
    used: Quantity,
    available: Quantity,
) -> PriorityResult<HostPriority> {
    if available.is_zero() {
        // The pod passed the gate, so it genuinely demands this dimension;
        // a zero-capacity node reaching the priority stage means the
        // filter stage or the node cache is inconsistent.
        return Err(PriorityError::ZeroAllocatable {
            node: node.to_string(),
            resource: resource.clone(),
        });
    }
    let demand = effective_demand(pod, resource);
    let score = utilization_score(used, demand, available);
    debug!(
        node = %node,
        resource = %resource,
        used = %used,
        demand = %demand,
        available = %available,
        score,
        "bin-packing score"
    );
    Ok(HostPriority { node: node.to_string(), score })
}

/// Bin-packing scorer for one fixed resource dimension.
#[derive(Debug, Clone)]
pub struct ResourceBinPacking {
    resource: ResourceName,
    name: String,
}

impl ResourceBinPacking {
    pub fn new(resource: ResourceName) -> Self {
        let name = format!("binpack/{resource}");
        ResourceBinPacking { resource, name }
    }

    /// Stable name for logs and registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Score one (pod, node) pair. Pure: identical inputs give identical
    /// results, and concurrent invocations share no state.
    pub fn score(
        &self,
        pod: &PodResources,
        snapshot: &NodeSnapshot,
    ) -> PriorityResult<HostPriority> {
        let node = snapshot.node_name.as_deref().ok_or(PriorityError::NodeNotFound)?;
        if self.resource.is_unset() {
            return Err(PriorityError::ResourceNotConfigured);
        }
        if !requests_resource(pod, &self.resource) {
            // The pod has no stake in this dimension; emit no preference
            // rather than biasing its placement.
            return Ok(HostPriority { node: node.to_string(), score: 0 });
        }
        let used = snapshot.requested.get(&self.resource);
        let available = snapshot.allocatable.get(&self.resource);
        score_packed(node, &self.resource, pod, used, available)
    }
}

/// Bin-packing scorer for an operator-declared scarce resource.
///
/// `used` is recomputed by folding the bound pods' effective demand
/// directly, rather than trusting the snapshot's precomputed totals, and
/// capacity comes from the extended-resource map with no built-in special
/// casing.
#[derive(Debug, Clone)]
pub struct ScarceResourceBinPacking {
    resource: ResourceName,
    name: String,
}

impl ScarceResourceBinPacking {
    pub fn new(resource_name: impl Into<String>) -> Self {
        let resource = ResourceName::from_name(&resource_name.into());
        let name = format!("scarce-binpack/{resource}");
        ScarceResourceBinPacking { resource, name }
    }

    /// Stable name for logs and registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Score one (pod, node) pair. Same contract as
    /// [`ResourceBinPacking::score`].
    pub fn score(
        &self,
        pod: &PodResources,
        snapshot: &NodeSnapshot,
    ) -> PriorityResult<HostPriority> {
        let node = snapshot.node_name.as_deref().ok_or(PriorityError::NodeNotFound)?;
        if self.resource.is_unset() {
            return Err(PriorityError::ResourceNotConfigured);
        }
        if !requests_resource(pod, &self.resource) {
            return Ok(HostPriority { node: node.to_string(), score: 0 });
        }
        let used = snapshot
            .pods
            .iter()
            .fold(Quantity::ZERO, |sum, bound| {
                sum.saturating_add(effective_demand(bound, &self.resource))
            });
        let available = snapshot.allocatable.scalar(&self.resource);
        score_packed(node, &self.resource, pod, used, available)
    }
}
