//! Snapshot domain types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use stowage_core::{PodResources, Quantity, ResourceName};

/// Per-dimension totals on one node.
///
/// The three built-in dimensions get dedicated fields (the hot path of
/// every scheduler accessor); extended dimensions live in the scalar map.
/// Used for both sides of the accounting: already-requested and
/// allocatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTotals {
    /// CPU in millicores.
    pub milli_cpu: Quantity,
    /// Memory in bytes.
    pub memory_bytes: Quantity,
    /// Ephemeral storage in bytes.
    pub ephemeral_storage_bytes: Quantity,
    /// Extended dimensions in whole units, keyed by resource name.
    #[serde(default)]
    pub scalars: HashMap<ResourceName, Quantity>,
}

impl ResourceTotals {
    /// Total for the dimension, dispatching built-ins to their dedicated
    /// fields and everything else to the scalar map. Absent scalars read
    /// as zero.
    pub fn get(&self, resource: &ResourceName) -> Quantity {
        match resource {
            ResourceName::Cpu => self.milli_cpu,
            ResourceName::Memory => self.memory_bytes,
            ResourceName::EphemeralStorage => self.ephemeral_storage_bytes,
            ResourceName::Extended(_) => {
                self.scalars.get(resource).copied().unwrap_or(Quantity::ZERO)
            }
        }
    }

    /// Scalar-map lookup only, with no built-in special casing. The
    /// scarce-resource path reads capacity this way: a scarce dimension is
    /// by definition not one of the built-ins, so whatever the name, only
    /// the scalar map is consulted.
    pub fn scalar(&self, resource: &ResourceName) -> Quantity {
        self.scalars.get(resource).copied().unwrap_or(Quantity::ZERO)
    }

    /// Accumulate into the dimension's total.
    pub fn add(&mut self, resource: &ResourceName, quantity: Quantity) {
        match resource {
            ResourceName::Cpu => self.milli_cpu = self.milli_cpu.saturating_add(quantity),
            ResourceName::Memory => self.memory_bytes = self.memory_bytes.saturating_add(quantity),
            ResourceName::EphemeralStorage => {
                self.ephemeral_storage_bytes = self.ephemeral_storage_bytes.saturating_add(quantity)
            }
            ResourceName::Extended(_) => {
                let total = self.scalars.entry(resource.clone()).or_insert(Quantity::ZERO);
                *total = total.saturating_add(quantity);
            }
        }
    }

    /// Builder used when constructing snapshots by hand.
    pub fn with(mut self, resource: ResourceName, quantity: Quantity) -> Self {
        self.add(&resource, quantity);
        self
    }
}

/// One node's state as seen by the priority stage for one cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Name of the node this snapshot was taken from. `None` when the
    /// provider holds an entry it can no longer tie to a live node; the
    /// scorers treat that as fatal for the (pod, node) pair.
    pub node_name: Option<String>,
    /// Totals already committed to bound pods, aggregated by the provider.
    pub requested: ResourceTotals,
    /// Schedulable capacity, net of system reservations (computed
    /// upstream).
    pub allocatable: ResourceTotals,
    /// Pods currently bound to the node.
    #[serde(default)]
    pub pods: Vec<PodResources>,
}

impl NodeSnapshot {
    pub fn new(node_name: impl Into<String>) -> Self {
        NodeSnapshot {
            node_name: Some(node_name.into()),
            ..Default::default()
        }
    }

    /// A snapshot whose node identity could not be resolved.
    pub fn unresolved() -> Self {
        NodeSnapshot::default()
    }

    pub fn with_allocatable(mut self, resource: ResourceName, quantity: Quantity) -> Self {
        self.allocatable.add(&resource, quantity);
        self
    }

    pub fn with_requested(mut self, resource: ResourceName, quantity: Quantity) -> Self {
        self.requested.add(&resource, quantity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dimensions_use_dedicated_fields() {
        let totals = ResourceTotals::default()
            .with(ResourceName::Cpu, Quantity::new(1500))
            .with(ResourceName::Memory, Quantity::new(4096));

        assert_eq!(totals.milli_cpu, Quantity::new(1500));
        assert_eq!(totals.memory_bytes, Quantity::new(4096));
        assert_eq!(totals.get(&ResourceName::Cpu), Quantity::new(1500));
        assert!(totals.scalars.is_empty());
    }

    #[test]
    fn extended_dimensions_use_the_scalar_map() {
        let gpu = ResourceName::from_name("example.com/gpu");
        let totals = ResourceTotals::default().with(gpu.clone(), Quantity::new(8));

        assert_eq!(totals.get(&gpu), Quantity::new(8));
        assert_eq!(totals.scalar(&gpu), Quantity::new(8));
    }

    #[test]
    fn absent_dimension_reads_as_zero() {
        let totals = ResourceTotals::default();
        assert_eq!(totals.get(&ResourceName::from_name("example.com/fpga")), Quantity::ZERO);
        assert_eq!(totals.get(&ResourceName::EphemeralStorage), Quantity::ZERO);
    }

    #[test]
    fn scalar_lookup_ignores_builtin_fields() {
        // The scarce path must not fall back to the dedicated CPU field
        // even when asked about "cpu".
        let totals = ResourceTotals::default().with(ResourceName::Cpu, Quantity::new(4000));
        assert_eq!(totals.scalar(&ResourceName::Cpu), Quantity::ZERO);
    }

    #[test]
    fn add_accumulates() {
        let gpu = ResourceName::from_name("example.com/gpu");
        let mut totals = ResourceTotals::default();
        totals.add(&gpu, Quantity::new(2));
        totals.add(&gpu, Quantity::new(3));
        assert_eq!(totals.get(&gpu), Quantity::new(5));
    }

    #[test]
    fn unresolved_snapshot_has_no_identity() {
        assert_eq!(NodeSnapshot::unresolved().node_name, None);
        assert_eq!(NodeSnapshot::new("node-1").node_name.as_deref(), Some("node-1"));
    }

    #[test]
    fn snapshot_serde_round_trips() {
        let gpu = ResourceName::from_name("example.com/gpu");
        let snapshot = NodeSnapshot::new("node-1")
            .with_allocatable(gpu.clone(), Quantity::new(4))
            .with_requested(gpu, Quantity::new(2));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: NodeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
