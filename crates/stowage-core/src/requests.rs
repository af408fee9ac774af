//! Request aggregation over a pod's containers.
//!
//! Shared by the placement scorers (incoming pod demand) and by snapshot
//! providers (folding bound pods into per-node requested totals), so the
//! two can never disagree about what a pod demands.

use crate::resources::{Quantity, ResourceName};
use crate::workload::PodResources;

/// Does this pod touch the dimension at all?
///
/// True if any container, regular or init, declares a request *or* a limit
/// for `resource` that is strictly positive at minor-unit granularity.
/// This is a gate, independent of the packing score: a pod that never uses
/// the dimension must score 0 everywhere, so the packer adds no bias to
/// placements it has no stake in.
pub fn requests_resource(pod: &PodResources, resource: &ResourceName) -> bool {
    pod.all_containers()
        .any(|c| !c.request(resource).is_zero() || !c.limit(resource).is_zero())
}

/// A pod's peak concurrent demand for `resource`.
///
/// Regular containers run concurrently for the pod's lifetime, so their
/// requests sum. Init containers run one at a time and never alongside
/// each other, so only the largest single init request is ever resident;
/// the pod's peak across its lifecycle is the larger of the two phases.
///
/// If an init container overlaps still-starting regular containers the
/// true peak can briefly exceed this. Accepted approximation.
pub fn effective_demand(pod: &PodResources, resource: &ResourceName) -> Quantity {
    let regular = pod
        .containers
        .iter()
        .fold(Quantity::ZERO, |sum, c| sum.saturating_add(c.request(resource)));
    let init = pod
        .init_containers
        .iter()
        .map(|c| c.request(resource))
        .max()
        .unwrap_or(Quantity::ZERO);
    regular.max(init)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::ContainerResources;

    fn gpu() -> ResourceName {
        ResourceName::from_name("example.com/gpu")
    }

    fn container_requesting(resource: ResourceName, amount: u64) -> ContainerResources {
        ContainerResources::new().with_request(resource, Quantity::new(amount))
    }

    #[test]
    fn pod_without_dimension_does_not_request_it() {
        let pod = PodResources::new("idle")
            .with_container(container_requesting(ResourceName::Cpu, 100));
        assert!(!requests_resource(&pod, &gpu()));
        assert!(requests_resource(&pod, &ResourceName::Cpu));
    }

    #[test]
    fn limit_alone_opens_the_gate() {
        let pod = PodResources::new("limited").with_container(
            ContainerResources::new().with_limit(gpu(), Quantity::new(1)),
        );
        assert!(requests_resource(&pod, &gpu()));
        // But limits never enter demand.
        assert_eq!(effective_demand(&pod, &gpu()), Quantity::ZERO);
    }

    #[test]
    fn zero_valued_request_does_not_open_the_gate() {
        let pod = PodResources::new("zeroed")
            .with_container(container_requesting(gpu(), 0));
        assert!(!requests_resource(&pod, &gpu()));
    }

    #[test]
    fn init_container_request_opens_the_gate() {
        let pod = PodResources::new("init-only")
            .with_init_container(container_requesting(gpu(), 1));
        assert!(requests_resource(&pod, &gpu()));
    }

    #[test]
    fn regular_requests_sum() {
        let pod = PodResources::new("pair")
            .with_container(container_requesting(gpu(), 1))
            .with_container(container_requesting(gpu(), 1));
        assert_eq!(effective_demand(&pod, &gpu()), Quantity::new(2));
    }

    #[test]
    fn largest_init_request_wins_over_regular_sum() {
        // Two regular containers at 1 each (sum 2) vs. a single init
        // container at 6: the init phase is the pod's peak.
        let pod = PodResources::new("heavy-init")
            .with_container(container_requesting(gpu(), 1))
            .with_container(container_requesting(gpu(), 1))
            .with_init_container(container_requesting(gpu(), 6));
        assert_eq!(effective_demand(&pod, &gpu()), Quantity::new(6));
    }

    #[test]
    fn init_requests_never_sum_with_each_other() {
        let pod = PodResources::new("staged")
            .with_init_container(container_requesting(gpu(), 3))
            .with_init_container(container_requesting(gpu(), 4));
        assert_eq!(effective_demand(&pod, &gpu()), Quantity::new(4));
    }

    #[test]
    fn demand_is_order_independent() {
        let a = PodResources::new("a")
            .with_container(container_requesting(gpu(), 2))
            .with_container(container_requesting(gpu(), 5))
            .with_init_container(container_requesting(gpu(), 1))
            .with_init_container(container_requesting(gpu(), 6));
        let b = PodResources::new("b")
            .with_container(container_requesting(gpu(), 5))
            .with_container(container_requesting(gpu(), 2))
            .with_init_container(container_requesting(gpu(), 6))
            .with_init_container(container_requesting(gpu(), 1));
        assert_eq!(effective_demand(&a, &gpu()), effective_demand(&b, &gpu()));
    }
}
