//! Research project status.
//!
//! The source workflow never defined a strict table for research — the
//! owner picks a status when filing and moves it as the project
//! progresses. The graph below is therefore advisory (`STRICT = false`):
//! it drives which buttons the shell offers, but an out-of-graph move by
//! a permitted owner is logged, not rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LifecycleError;
use crate::kind::EntityKind;
use crate::states::{unknown_state, LifecycleState};

/// Status of a research project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum ResearchStatus {
    /// Scoped but not yet started
    Planning,
    /// Actively running
    Ongoing,
    /// Finished
    Completed,
    /// Temporarily halted
    Paused,
    /// Abandoned
    Cancelled,
}

impl LifecycleState for ResearchStatus {
    const KIND: EntityKind = EntityKind::ResearchProject;
    const STATUS_FIELD: &'static str = "status";
    const STRICT: bool = false;

    fn all() -> &'static [Self] {
        &[
            ResearchStatus::Planning,
            ResearchStatus::Ongoing,
            ResearchStatus::Completed,
            ResearchStatus::Paused,
            ResearchStatus::Cancelled,
        ]
    }

    fn initial() -> Self {
        ResearchStatus::Planning
    }

    fn legal_transitions(&self) -> &'static [Self] {
        match self {
            ResearchStatus::Planning => &[ResearchStatus::Ongoing],
            ResearchStatus::Ongoing => &[
                ResearchStatus::Completed,
                ResearchStatus::Paused,
                ResearchStatus::Cancelled,
            ],
            ResearchStatus::Paused => &[ResearchStatus::Ongoing],
            ResearchStatus::Completed | ResearchStatus::Cancelled => &[],
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ResearchStatus::Planning => "planning",
            ResearchStatus::Ongoing => "ongoing",
            ResearchStatus::Completed => "completed",
            ResearchStatus::Paused => "paused",
            ResearchStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ResearchStatus::Planning => "Planning",
            ResearchStatus::Ongoing => "Ongoing",
            ResearchStatus::Completed => "Completed",
            ResearchStatus::Paused => "Paused",
            ResearchStatus::Cancelled => "Cancelled",
        }
    }

    fn badge_color(&self) -> &'static str {
        match self {
            ResearchStatus::Planning => "#607D8B",
            ResearchStatus::Ongoing => "#2196F3",
            ResearchStatus::Completed => "#4CAF50",
            ResearchStatus::Paused => "#FF9800",
            ResearchStatus::Cancelled => "#f44336",
        }
    }
}

impl fmt::Display for ResearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResearchStatus {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|state| state.as_str() == s)
            .copied()
            .ok_or_else(|| unknown_state::<Self>(s))
    }
}
