//! Pod-level resource declarations.
//!
//! A pod is an ordered list of regular containers plus an ordered list of
//! init containers. Regular containers run concurrently for the pod's
//! lifetime; init containers run one at a time, to completion, before any
//! regular container starts. Requests and limits are independent maps —
//! both matter for "does this pod touch the dimension at all", only
//! requests enter placement arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::resources::{Quantity, ResourceName};

/// Requests and limits declared by a single container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerResources {
    #[serde(default)]
    pub requests: HashMap<ResourceName, Quantity>,
    #[serde(default)]
    pub limits: HashMap<ResourceName, Quantity>,
}

impl ContainerResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request(mut self, resource: ResourceName, quantity: Quantity) -> Self {
        self.requests.insert(resource, quantity);
        self
    }

    pub fn with_limit(mut self, resource: ResourceName, quantity: Quantity) -> Self {
        self.limits.insert(resource, quantity);
        self
    }

    /// Declared request for the dimension, zero if absent.
    pub fn request(&self, resource: &ResourceName) -> Quantity {
        self.requests.get(resource).copied().unwrap_or(Quantity::ZERO)
    }

    /// Declared limit for the dimension, zero if absent.
    pub fn limit(&self, resource: &ResourceName) -> Quantity {
        self.limits.get(resource).copied().unwrap_or(Quantity::ZERO)
    }
}

/// Resource shape of a pod awaiting placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodResources {
    /// Pod identity, used only for logging and diagnostics.
    pub name: String,
    #[serde(default)]
    pub containers: Vec<ContainerResources>,
    #[serde(default)]
    pub init_containers: Vec<ContainerResources>,
}

impl PodResources {
    pub fn new(name: impl Into<String>) -> Self {
        PodResources {
            name: name.into(),
            containers: Vec::new(),
            init_containers: Vec::new(),
        }
    }

    pub fn with_container(mut self, container: ContainerResources) -> Self {
        self.containers.push(container);
        self
    }

    pub fn with_init_container(mut self, container: ContainerResources) -> Self {
        self.init_containers.push(container);
        self
    }

    /// All containers, init first — the order they become resident in.
    pub fn all_containers(&self) -> impl Iterator<Item = &ContainerResources> {
        self.init_containers.iter().chain(self.containers.iter())
    }
}
