//! Named policies controlling graph construction and eligibility gating

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a prerequisite code that was never registered in the graph is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownPrerequisitePolicy {
    /// The completed set is the only source of truth: an unknown code that is
    /// not in it blocks the dependent course.
    #[default]
    Block,
    /// Unknown codes count as satisfied.
    Ignore,
}

/// How prerequisite edges are resolved while courses are added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeResolution {
    /// Edges are wired regardless of the order courses arrive in.
    #[default]
    OrderIndependent,
    /// An edge is only created when the prerequisite was registered before
    /// the dependent; later arrivals never get wired.
    InsertionOrder,
}

/// Graph configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Treatment of prerequisite codes that are not in the graph
    #[serde(default)]
    pub unknown_prerequisites: UnknownPrerequisitePolicy,
    /// Edge wiring strategy
    #[serde(default)]
    pub edge_resolution: EdgeResolution,
}

impl GraphOptions {
    /// Options with both policies given explicitly
    #[must_use]
    pub const fn new(
        unknown_prerequisites: UnknownPrerequisitePolicy,
        edge_resolution: EdgeResolution,
    ) -> Self {
        Self {
            unknown_prerequisites,
            edge_resolution,
        }
    }
}

impl UnknownPrerequisitePolicy {
    /// Config-file spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Ignore => "ignore",
        }
    }
}

impl EdgeResolution {
    /// Config-file spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderIndependent => "order-independent",
            Self::InsertionOrder => "insertion-order",
        }
    }
}

impl FromStr for UnknownPrerequisitePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!(
                "Invalid unknown-prerequisite policy: '{other}' (expected 'block' or 'ignore')"
            )),
        }
    }
}

impl FromStr for EdgeResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "order-independent" | "two-pass" => Ok(Self::OrderIndependent),
            "insertion-order" => Ok(Self::InsertionOrder),
            other => Err(format!(
                "Invalid edge resolution: '{other}' (expected 'order-independent' or 'insertion-order')"
            )),
        }
    }
}

impl fmt::Display for UnknownPrerequisitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EdgeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
