//! Startup stage and funding stage.
//!
//! A startup carries two independent machines on the same entity: the
//! growth chain and the funding chain. Both are strictly one-directional
//! with no rejection branch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LifecycleError;
use crate::kind::EntityKind;
use crate::states::{unknown_state, LifecycleState};

/// Growth stage of a startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum StartupStage {
    Ideation,
    Validation,
    EarlyStage,
    Growth,
    Expansion,
    Mature,
    /// Terminal
    Exit,
}

impl LifecycleState for StartupStage {
    const KIND: EntityKind = EntityKind::Startup;
    const STATUS_FIELD: &'static str = "stage";

    fn all() -> &'static [Self] {
        &[
            StartupStage::Ideation,
            StartupStage::Validation,
            StartupStage::EarlyStage,
            StartupStage::Growth,
            StartupStage::Expansion,
            StartupStage::Mature,
            StartupStage::Exit,
        ]
    }

    fn initial() -> Self {
        StartupStage::Ideation
    }

    fn legal_transitions(&self) -> &'static [Self] {
        match self {
            StartupStage::Ideation => &[StartupStage::Validation],
            StartupStage::Validation => &[StartupStage::EarlyStage],
            StartupStage::EarlyStage => &[StartupStage::Growth],
            StartupStage::Growth => &[StartupStage::Expansion],
            StartupStage::Expansion => &[StartupStage::Mature],
            StartupStage::Mature => &[StartupStage::Exit],
            StartupStage::Exit => &[],
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            StartupStage::Ideation => "ideation",
            StartupStage::Validation => "validation",
            StartupStage::EarlyStage => "early_stage",
            StartupStage::Growth => "growth",
            StartupStage::Expansion => "expansion",
            StartupStage::Mature => "mature",
            StartupStage::Exit => "exit",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StartupStage::Ideation => "Ideation",
            StartupStage::Validation => "Validation",
            StartupStage::EarlyStage => "Early Stage",
            StartupStage::Growth => "Growth",
            StartupStage::Expansion => "Expansion",
            StartupStage::Mature => "Mature",
            StartupStage::Exit => "Exit",
        }
    }

    fn badge_color(&self) -> &'static str {
        match self {
            StartupStage::Ideation => "#2196F3",
            StartupStage::Validation => "#FF9800",
            StartupStage::EarlyStage => "#9C27B0",
            StartupStage::Growth => "#4CAF50",
            StartupStage::Expansion => "#607D8B",
            StartupStage::Mature => "#795548",
            StartupStage::Exit => "#E91E63",
        }
    }
}

impl fmt::Display for StartupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartupStage {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|state| state.as_str() == s)
            .copied()
            .ok_or_else(|| unknown_state::<Self>(s))
    }
}

/// Funding stage of a startup — the second, independent machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum FundingStage {
    Bootstrapped,
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    /// Terminal
    SeriesC,
}

impl LifecycleState for FundingStage {
    const KIND: EntityKind = EntityKind::Startup;
    const STATUS_FIELD: &'static str = "fundingStage";

    fn all() -> &'static [Self] {
        &[
            FundingStage::Bootstrapped,
            FundingStage::PreSeed,
            FundingStage::Seed,
            FundingStage::SeriesA,
            FundingStage::SeriesB,
            FundingStage::SeriesC,
        ]
    }

    fn initial() -> Self {
        FundingStage::Bootstrapped
    }

    fn legal_transitions(&self) -> &'static [Self] {
        match self {
            FundingStage::Bootstrapped => &[FundingStage::PreSeed],
            FundingStage::PreSeed => &[FundingStage::Seed],
            FundingStage::Seed => &[FundingStage::SeriesA],
            FundingStage::SeriesA => &[FundingStage::SeriesB],
            FundingStage::SeriesB => &[FundingStage::SeriesC],
            FundingStage::SeriesC => &[],
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            FundingStage::Bootstrapped => "bootstrapped",
            FundingStage::PreSeed => "pre_seed",
            FundingStage::Seed => "seed",
            FundingStage::SeriesA => "series_a",
            FundingStage::SeriesB => "series_b",
            FundingStage::SeriesC => "series_c",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FundingStage::Bootstrapped => "Bootstrapped",
            FundingStage::PreSeed => "Pre-Seed",
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::SeriesB => "Series B",
            FundingStage::SeriesC => "Series C",
        }
    }

    fn badge_color(&self) -> &'static str {
        match self {
            FundingStage::Bootstrapped => "#4CAF50",
            FundingStage::PreSeed => "#FF9800",
            FundingStage::Seed => "#9C27B0",
            FundingStage::SeriesA => "#2196F3",
            FundingStage::SeriesB => "#607D8B",
            FundingStage::SeriesC => "#795548",
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundingStage {
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
    fn test_growth_chain_is_one_directional() {
        for stage in StartupStage::all() {
            assert!(stage.legal_transitions().len() <= 1, "{stage}");
        }
        assert!(!StartupStage::Growth.can_reach(StartupStage::EarlyStage));
    }

    #[test]
    fn test_machines_are_independent_fields() {
        assert_eq!(StartupStage::STATUS_FIELD, "stage");
        assert_eq!(FundingStage::STATUS_FIELD, "fundingStage");
        assert_eq!(StartupStage::KIND, FundingStage::KIND);
    }

    #[test]
    fn test_funding_chain_ends_at_series_c() {
        assert!(FundingStage::SeriesC.is_terminal());
        assert!(FundingStage::SeriesB.can_reach(FundingStage::SeriesC));
    }
}
