//! Resource dimensions and quantities.
//!
//! A [`ResourceName`] identifies one schedulable dimension. The three
//! built-in dimensions get dedicated fields in node accounting; everything
//! else is an extended (vendor/device) dimension tracked in a scalar map.
//! A [`Quantity`] is an integral amount in the dimension's minor unit:
//! millicores for CPU, bytes for memory and ephemeral storage, whole units
//! for extended resources.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A resource dimension a container can request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceName {
    /// CPU, accounted in millicores.
    Cpu,
    /// Memory, accounted in bytes.
    Memory,
    /// Ephemeral (node-local) storage, accounted in bytes.
    EphemeralStorage,
    /// An extended dimension (device, accelerator, vendor resource),
    /// accounted in whole units. The name is typically vendor-namespaced,
    /// e.g. `"example.com/gpu"`.
    Extended(String),
}

impl ResourceName {
    /// Parse the canonical string form. Anything that isn't one of the
    /// three built-in names is an extended resource.
    pub fn from_name(name: &str) -> Self {
        match name {
            "cpu" => ResourceName::Cpu,
            "memory" => ResourceName::Memory,
            "ephemeral-storage" => ResourceName::EphemeralStorage,
            other => ResourceName::Extended(other.to_string()),
        }
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &str {
        match self {
            ResourceName::Cpu => "cpu",
            ResourceName::Memory => "memory",
            ResourceName::EphemeralStorage => "ephemeral-storage",
            ResourceName::Extended(name) => name,
        }
    }

    /// True for the three dimensions with dedicated node accounting.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ResourceName::Extended(_))
    }

    /// An extended dimension with an empty name. A scorer bound to an
    /// unset dimension is a wiring bug, not a scorable state.
    pub fn is_unset(&self) -> bool {
        matches!(self, ResourceName::Extended(name) if name.is_empty())
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        ResourceName::from_name(name)
    }
}

// Serialized as the canonical string so resource-keyed maps stay readable
// (and valid as JSON object keys).
impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ResourceName::from_name(&name))
    }
}

/// An integral, non-negative amount in a dimension's minor unit.
///
/// Stored at the finest granularity the dimension has, so a zero test on
/// the raw value is exact — there is no sub-unit remainder to lose.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(amount: u64) -> Self {
        Quantity(amount)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Addition for request accounting. Saturates rather than wrapping;
    /// declared requests near `u64::MAX` are already nonsense.
    pub fn saturating_add(self, other: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(other.0))
    }
}

impl From<u64> for Quantity {
    fn from(amount: u64) -> Self {
        Quantity(amount)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_round_trip() {
        for name in ["cpu", "memory", "ephemeral-storage"] {
            let resource = ResourceName::from_name(name);
            assert!(resource.is_builtin());
            assert_eq!(resource.as_str(), name);
        }
    }

    #[test]
    fn unknown_names_are_extended() {
        let resource = ResourceName::from_name("example.com/gpu");
        assert_eq!(resource, ResourceName::Extended("example.com/gpu".to_string()));
        assert!(!resource.is_builtin());
        assert!(!resource.is_unset());
    }

    #[test]
    fn empty_extended_name_is_unset() {
        assert!(ResourceName::from_name("").is_unset());
        assert!(!ResourceName::Cpu.is_unset());
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&ResourceName::EphemeralStorage).unwrap();
        assert_eq!(json, "\"ephemeral-storage\"");

        let back: ResourceName = serde_json::from_str("\"example.com/gpu\"").unwrap();
        assert_eq!(back, ResourceName::Extended("example.com/gpu".to_string()));
    }

    #[test]
    fn quantity_ordering_is_exact() {
        assert!(Quantity::new(2) < Quantity::new(3));
        assert_eq!(Quantity::new(5), Quantity::new(5));
        assert!(Quantity::new(1).max(Quantity::new(4)) == Quantity::new(4));
    }

    #[test]
    fn quantity_addition_saturates() {
        let nearly_max = Quantity::new(u64::MAX - 1);
        assert_eq!(nearly_max.saturating_add(Quantity::new(10)).value(), u64::MAX);
    }

    #[test]
    fn zero_test_is_minor_unit_exact() {
        assert!(Quantity::ZERO.is_zero());
        // One millicore / one byte / one device unit is already non-zero.
        assert!(!Quantity::new(1).is_zero());
    }
}
