//! Priority-stage error types.

use stowage_core::ResourceName;
use thiserror::Error;

/// Result type alias for priority-stage operations.
pub type PriorityResult<T> = Result<T, PriorityError>;

/// Errors a scoring call can surface.
///
/// All of these are fatal for the single (pod, node) pair being scored and
/// must reach the driver; none may be silently turned into a score.
#[derive(Debug, Error, PartialEq)]
pub enum PriorityError {
    /// The snapshot carries no resolvable node identity. Indicates a stale
    /// or inconsistent node cache, not a placement decision.
    #[error("node not found")]
    NodeNotFound,

    /// The scorer has no resource dimension bound. A wiring bug in the
    /// priority-stage setup, not a per-request condition.
    #[error("no resource dimension configured")]
    ResourceNotConfigured,

    /// The node reports zero allocatable capacity for a dimension the pod
    /// genuinely demands. The filter stage should never have let this node
    /// through; refusing to score beats inventing a neutral value.
    #[error("node {node} has zero allocatable {resource}")]
    ZeroAllocatable { node: String, resource: ResourceName },
}
