//! stowage.toml priority-stage configuration parser.
//!
//! Declares which bin-packing priorities the scheduler registers: one
//! generic entry per resource dimension, plus the operator-declared scarce
//! resource names. Weights are carried through for the caller's reduction
//! step; the scorers themselves never read them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Priority weight applied when an entry doesn't specify one.
const DEFAULT_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityConfig {
    /// Generic bin-packing entries, one scorer per resource.
    #[serde(default)]
    pub binpacking: Vec<BinPackingEntry>,
    /// Operator-declared scarce resource names, one scarce scorer each.
    #[serde(default)]
    pub scarce: Vec<String>,
}

/// One generic bin-packing registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinPackingEntry {
    /// Resource dimension name: "cpu", "memory", "ephemeral-storage", or
    /// an extended resource name.
    pub resource: String,
    /// Weight for the external weighted-sum reduction.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

impl PriorityConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PriorityConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
