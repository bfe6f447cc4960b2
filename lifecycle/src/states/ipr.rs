//! IPR application status.
//!
//! Follows the patent-office progression: a draft is filed, a filed
//! application is published or rejected, a published one goes to
//! examination, and examination ends in grant or rejection. Grant and
//! rejection are dead ends — there is no re-filing edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LifecycleError;
use crate::kind::EntityKind;
use crate::states::{unknown_state, LifecycleState};

/// Status of an intellectual-property application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum IprStatus {
    /// Being prepared by the owner
    Draft,
    /// Submitted to the office
    Filed,
    /// Published for opposition
    Published,
    /// Under substantive examination
    Examined,
    /// Granted — terminal
    Granted,
    /// Rejected — terminal
    Rejected,
}

impl LifecycleState for IprStatus {
    const KIND: EntityKind = EntityKind::IprApplication;
    const STATUS_FIELD: &'static str = "status";

    fn all() -> &'static [Self] {
        &[
            IprStatus::Draft,
            IprStatus::Filed,
            IprStatus::Published,
            IprStatus::Examined,
            IprStatus::Granted,
            IprStatus::Rejected,
        ]
    }

    fn initial() -> Self {
        IprStatus::Draft
    }

    fn legal_transitions(&self) -> &'static [Self] {
        match self {
            IprStatus::Draft => &[IprStatus::Filed],
            IprStatus::Filed => &[IprStatus::Published, IprStatus::Rejected],
            IprStatus::Published => &[IprStatus::Examined],
            IprStatus::Examined => &[IprStatus::Granted, IprStatus::Rejected],
            IprStatus::Granted | IprStatus::Rejected => &[],
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            IprStatus::Draft => "draft",
            IprStatus::Filed => "filed",
            IprStatus::Published => "published",
            IprStatus::Examined => "examined",
            IprStatus::Granted => "granted",
            IprStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IprStatus::Draft => "Draft",
            IprStatus::Filed => "Filed",
            IprStatus::Published => "Published",
            IprStatus::Examined => "Examined",
            IprStatus::Granted => "Granted",
            IprStatus::Rejected => "Rejected",
        }
    }

    fn badge_color(&self) -> &'static str {
        match self {
            IprStatus::Draft => "#6C757D",
            IprStatus::Filed => "#2196F3",
            IprStatus::Published => "#FF9800",
            IprStatus::Examined => "#9C27B0",
            IprStatus::Granted => "#4CAF50",
            IprStatus::Rejected => "#f44336",
        }
    }
}

impl fmt::Display for IprStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IprStatus {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|state| state.as_str() == s)
            .copied()
            .ok_or_else(|| unknown_state::<Self>(s))
    }
}
