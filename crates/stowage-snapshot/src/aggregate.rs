//! Provider-side request accumulation.
//!
//! Folds bound pods into a node's requested totals using the same
//! effective-demand policy the scorers apply to an incoming pod, so the
//! precomputed totals the generic packer trusts and the direct
//! recomputation the scarce packer performs agree by construction.

use std::collections::HashSet;

use stowage_core::{PodResources, effective_demand};

use crate::types::{NodeSnapshot, ResourceTotals};

/// Fold one bound pod's effective demand into the totals, one dimension at
/// a time. Only requests reserve capacity; limits are ignored here.
pub fn accumulate_pod(totals: &mut ResourceTotals, pod: &PodResources) {
    let mut dimensions = HashSet::new();
    for container in pod.all_containers() {
        for resource in container.requests.keys() {
            dimensions.insert(resource.clone());
        }
    }
    for resource in &dimensions {
        totals.add(resource, effective_demand(pod, resource));
    }
}

impl NodeSnapshot {
    /// Attach bound pods and accumulate their demand into `requested`.
    ///
    /// Convenience for providers and tests; a provider that tracks totals
    /// incrementally can just as well fill the fields directly.
    pub fn with_pods(mut self, pods: Vec<PodResources>) -> Self {
        for pod in &pods {
            accumulate_pod(&mut self.requested, pod);
        }
        self.pods = pods;
        self
    }
}
