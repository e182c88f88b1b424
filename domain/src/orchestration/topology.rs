//! Topology value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Strategy governing call order and concurrency among agents (Value Object)
///
/// Parsing never fails: unrecognized identifiers select [`Topology::Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Sequential chain over a single ledger
    #[default]
    Chain,
    /// Forward and reverse passes over a shared ledger
    Helix,
    /// Relay arms over every rotation of the agents, then a synthesis
    Star,
}

impl Topology {
    /// Canonical wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Chain => "standard-chain",
            Topology::Helix => "double-helix",
            Topology::Star => "star-topology",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Topology::Chain => "Standard Chain",
            Topology::Helix => "Double Helix",
            Topology::Star => "Star Topology",
        }
    }

    /// Resolve a request identifier, defaulting to Chain.
    pub fn from_identifier(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "double-helix" | "helix" => Topology::Helix,
            "star-topology" | "star" => Topology::Star,
            _ => Topology::Chain,
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Topology {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Topology::from_identifier(s))
    }
}

impl Serialize for Topology {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Topology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Topology::from_identifier(&s))
    }
}
