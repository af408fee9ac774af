//! stowage-priority — resource bin-packing placement scoring.
//!
//! The priority stage of a cluster scheduler, for one policy: pack pods
//! onto the nodes already most utilized for a designated resource
//! dimension, consolidating consumption of scarce or cost-sensitive
//! capacity instead of spreading it. This crate does NOT filter, bind, or
//! preempt; it turns one (pod, node snapshot) pair into one integer score
//! and leaves every other scheduling decision to its caller.
//!
//! # Components
//!
//! - **`binpack`** — the two scorer types over one shared scoring core
//! - **`driver`** — per-node fan-out, input-order collection, per-node
//!   failure isolation
//! - **`registry`** — config-driven construction of the scorer set
//! - **`error`** — the typed failure taxonomy

pub mod binpack;
pub mod driver;
pub mod error;
pub mod registry;

pub use binpack::{HostPriority, MAX_PRIORITY, ResourceBinPacking, ScarceResourceBinPacking};
pub use driver::{PriorityFunction, PriorityOutcome, run_priority};
pub use error::{PriorityError, PriorityResult};
pub use registry::{RegisteredPriority, build_priorities};
