//! Config-driven priority registration.
//!
//! Turns a parsed [`PriorityConfig`] into the boxed priority functions the
//! stage runs. Misconfiguration (an unset resource name) is rejected here,
//! at wiring time, rather than surfacing on every scoring call.

use tracing::info;

use stowage_core::{PriorityConfig, ResourceName};

use crate::binpack::{ResourceBinPacking, ScarceResourceBinPacking};
use crate::driver::PriorityFunction;
use crate::error::{PriorityError, PriorityResult};

/// A registered priority function with its reduction weight.
///
/// The weighted-sum reduction across priority functions happens outside
/// this crate; the weight is carried through untouched.
pub struct RegisteredPriority {
    pub weight: u32,
    pub priority: Box<dyn PriorityFunction>,
}

/// Build the priority functions a config declares: one generic bin-packer
/// per `binpacking` entry, one scarce bin-packer per `scarce` name.
pub fn build_priorities(config: &PriorityConfig) -> PriorityResult<Vec<RegisteredPriority>> {
    let mut registered = Vec::new();

    for entry in &config.binpacking {
        let resource = ResourceName::from_name(&entry.resource);
        if resource.is_unset() {
            return Err(PriorityError::ResourceNotConfigured);
        }
        let priority = ResourceBinPacking::new(resource);
        info!(priority = priority.name(), weight = entry.weight, "registered priority");
        registered.push(RegisteredPriority {
            weight: entry.weight,
            priority: Box::new(priority),
        });
    }

    for name in &config.scarce {
        if name.is_empty() {
            return Err(PriorityError::ResourceNotConfigured);
        }
        let priority = ScarceResourceBinPacking::new(name.clone());
        info!(priority = priority.name(), "registered scarce priority");
        registered.push(RegisteredPriority { weight: 1, priority: Box::new(priority) });
    }

    Ok(registered)
}
