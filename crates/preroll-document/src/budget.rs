//! Budget tiers

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Cost tier of a budget estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Low budget estimate
    Low,
    /// Medium budget estimate
    Medium,
    /// High budget estimate
    High,
}

impl BudgetTier {
    /// Tiers in ascending order
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Heading phrase that opens the tier in free text
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Low => "LOW BUDGET",
            Self::Medium => "MEDIUM BUDGET",
            Self::High => "HIGH BUDGET",
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for BudgetTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized tier name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown budget tier: '{0}' (expected low, medium or high)")]
pub struct UnknownTierError(pub String);

impl FromStr for BudgetTier {
    type Err = UnknownTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "mid" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(UnknownTierError(other.to_string())),
        }
    }
}

/// Text of one tier, heading line included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetTierSlice {
    /// Tier the slice belongs to
    pub tier: BudgetTier,
    /// Slice text (empty when the tier was absent)
    pub text: String,
}

impl BudgetTierSlice {
    /// Create slice
    #[inline]
    #[must_use]
    pub fn new(tier: BudgetTier, text: impl Into<String>) -> Self {
        Self {
            tier,
            text: text.into(),
        }
    }

    /// Tier absent from the source text
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
