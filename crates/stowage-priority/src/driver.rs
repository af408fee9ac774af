//! Priority-stage fan-out driver.
//!
//! Runs one priority function across a candidate node list for one pod.
//! Scorers are pure and share no mutable state, so the caller is free to
//! fan invocations out across workers; this driver keeps the sequential
//! reference shape the fan-out must stay observably identical to:
//! scores land in node-input order, and one node's failure never aborts
//! the rest of the pass.

use tracing::warn;

use stowage_core::PodResources;
use stowage_snapshot::NodeSnapshot;

use crate::binpack::{HostPriority, ResourceBinPacking, ScarceResourceBinPacking};
use crate::error::{PriorityError, PriorityResult};

/// A priority function the stage can run per (pod, node) pair.
///
/// Implementations must be pure: no interior mutability, no I/O, and
/// identical inputs give identical results, so invocations may run
/// concurrently across nodes.
pub trait PriorityFunction: Send + Sync {
    /// Stable name for logs and registration.
    fn name(&self) -> &str;

    /// Score one (pod, node) pair.
    fn score(&self, pod: &PodResources, snapshot: &NodeSnapshot) -> PriorityResult<HostPriority>;
}

impl PriorityFunction for ResourceBinPacking {
    fn name(&self) -> &str {
        ResourceBinPacking::name(self)
    }

    fn score(&self, pod: &PodResources, snapshot: &NodeSnapshot) -> PriorityResult<HostPriority> {
        ResourceBinPacking::score(self, pod, snapshot)
    }
}

impl PriorityFunction for ScarceResourceBinPacking {
    fn name(&self) -> &str {
        ScarceResourceBinPacking::name(self)
    }

    fn score(&self, pod: &PodResources, snapshot: &NodeSnapshot) -> PriorityResult<HostPriority> {
        ScarceResourceBinPacking::score(self, pod, snapshot)
    }
}

/// Result of one priority pass over a candidate node list.
#[derive(Debug, Default)]
pub struct PriorityOutcome {
    /// Scores for the nodes that scored, in node-input order.
    pub scores: Vec<HostPriority>,
    /// Failed nodes as (input index, error). The caller decides whether to
    /// exclude or penalize them; they are never silently scored 0.
    pub failures: Vec<(usize, PriorityError)>,
}

/// Run `priority` over every candidate node for `pod`.
pub fn run_priority(
    priority: &dyn PriorityFunction,
    pod: &PodResources,
    snapshots: &[NodeSnapshot],
) -> PriorityOutcome {
    let mut outcome = PriorityOutcome::default();
    for (index, snapshot) in snapshots.iter().enumerate() {
        match priority.score(pod, snapshot) {
            Ok(score) => outcome.scores.push(score),
            Err(err) => {
                warn!(
                    priority = priority.name(),
                    pod = %pod.name,
                    index,
                    error = %err,
                    "node scoring failed, excluding node from this pass"
                );
                outcome.failures.push((index, err));
            }
        }
    }
    outcome
}
