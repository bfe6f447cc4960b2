//! Innovation idea stage.
//!
//! The incubation pipeline: every forward stage can also fall to
//! `rejected`, and — unlike the IPR and startup tables — a rejected idea
//! may re-enter review. That re-entry edge is an intended business rule
//! for ideas specifically (a rejected idea can be reworked and
//! resubmitted for review), preserved exactly as declared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LifecycleError;
use crate::kind::EntityKind;
use crate::states::{unknown_state, LifecycleState};

/// Stage of an innovation idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum InnovationStage {
    /// Filed by the owner
    Submitted,
    /// Being reviewed by the incubation team
    UnderReview,
    /// Accepted for incubation
    Approved,
    /// In the incubator
    InIncubation,
    /// Prototype built
    Prototype,
    /// Pilot deployment
    Pilot,
    /// Ready for market — terminal
    MarketReady,
    /// Rejected; may re-enter review
    Rejected,
}

impl LifecycleState for InnovationStage {
    const KIND: EntityKind = EntityKind::InnovationIdea;
    const STATUS_FIELD: &'static str = "stage";

    fn all() -> &'static [Self] {
        &[
            InnovationStage::Submitted,
            InnovationStage::UnderReview,
            InnovationStage::Approved,
            InnovationStage::InIncubation,
            InnovationStage::Prototype,
            InnovationStage::Pilot,
            InnovationStage::MarketReady,
            InnovationStage::Rejected,
        ]
    }

    fn initial() -> Self {
        InnovationStage::Submitted
    }

    fn legal_transitions(&self) -> &'static [Self] {
        match self {
            InnovationStage::Submitted => {
                &[InnovationStage::UnderReview, InnovationStage::Rejected]
            }
            InnovationStage::UnderReview => {
                &[InnovationStage::Approved, InnovationStage::Rejected]
            }
            InnovationStage::Approved => {
                &[InnovationStage::InIncubation, InnovationStage::Rejected]
            }
            InnovationStage::InIncubation => {
                &[InnovationStage::Prototype, InnovationStage::Rejected]
            }
            InnovationStage::Prototype => &[InnovationStage::Pilot, InnovationStage::Rejected],
            InnovationStage::Pilot => &[InnovationStage::MarketReady, InnovationStage::Rejected],
            InnovationStage::MarketReady => &[],
            // Re-entrant: a rejected idea can go back under review.
            InnovationStage::Rejected => &[InnovationStage::UnderReview],
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            InnovationStage::Submitted => "submitted",
            InnovationStage::UnderReview => "under_review",
            InnovationStage::Approved => "approved",
            InnovationStage::InIncubation => "in_incubation",
            InnovationStage::Prototype => "prototype",
            InnovationStage::Pilot => "pilot",
            InnovationStage::MarketReady => "market_ready",
            InnovationStage::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InnovationStage::Submitted => "Submitted",
            InnovationStage::UnderReview => "Under Review",
            InnovationStage::Approved => "Approved",
            InnovationStage::InIncubation => "In Incubation",
            InnovationStage::Prototype => "Prototype",
            InnovationStage::Pilot => "Pilot",
            InnovationStage::MarketReady => "Market Ready",
            InnovationStage::Rejected => "Rejected",
        }
    }

    fn badge_color(&self) -> &'static str {
        match self {
            InnovationStage::Submitted => "#2196F3",
            InnovationStage::UnderReview => "#FF9800",
            InnovationStage::Approved => "#4CAF50",
            InnovationStage::InIncubation => "#9C27B0",
            InnovationStage::Prototype => "#607D8B",
            InnovationStage::Pilot => "#795548",
            InnovationStage::MarketReady => "#4CAF50",
            InnovationStage::Rejected => "#f44336",
        }
    }
}

impl fmt::Display for InnovationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InnovationStage {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|state| state.as_str() == s)
            .copied()
            .ok_or_else(|| unknown_state::<Self>(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_re_enters_review() {
        assert_eq!(
            InnovationStage::Rejected.legal_transitions(),
            &[InnovationStage::UnderReview]
        );
    }

    #[test]
    fn test_every_forward_stage_can_fall_to_rejected() {
        for stage in [
            InnovationStage::Submitted,
            InnovationStage::UnderReview,
            InnovationStage::Approved,
            InnovationStage::InIncubation,
            InnovationStage::Prototype,
            InnovationStage::Pilot,
        ] {
            assert!(stage.can_reach(InnovationStage::Rejected), "{stage}");
        }
    }

    #[test]
    fn test_market_ready_is_terminal() {
        assert!(InnovationStage::MarketReady.is_terminal());
    }
}
