//! Cleanup recommendation tier

use serde::{Deserialize, Serialize};

/// Discrete suitability rating for the beach-cleanup activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Conditions are ideal
    Excellent,
    /// Warm but workable
    Good,
    /// Marginal; plan for shade and breaks
    Fair,
    /// Heavy rain or strong wind; reschedule
    Poor,
}

impl RecommendationTier {
    /// Short headline for the tier
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Human-readable guidance shown next to the tier
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Perfect conditions for a beach cleanup. See you on the sand!",
            Self::Good => "Great day for a cleanup. Bring water and sunscreen.",
            Self::Fair => "Doable, but plan for shade breaks and keep the session short.",
            Self::Poor => "Conditions are rough. Consider rescheduling this cleanup.",
        }
    }

    /// Emoji representation of the tier
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Excellent => "🌟",
            Self::Good => "👍",
            Self::Fair => "🤔",
            Self::Poor => "⛔",
        }
    }
}

impl std::fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline())
    }
}
