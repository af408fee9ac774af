pub mod config;
pub mod requests;
pub mod resources;
pub mod workload;

pub use config::{BinPackingEntry, PriorityConfig};
pub use requests::{effective_demand, requests_resource};
pub use resources::{Quantity, ResourceName};
pub use workload::{ContainerResources, PodResources};
