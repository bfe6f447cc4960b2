//! Per-kind state enumerations and transition tables.
//!
//! One module per entity kind. Each state enum is closed, carries its
//! static adjacency table, and renders its own badge color through an
//! exhaustive match — adding a state without a color or a transition row
//! is a compile error, not a silent fallback.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::LifecycleError;
use crate::kind::EntityKind;

pub mod innovation;
pub mod ipr;
pub mod research;
pub mod startup;

/// A closed lifecycle state enumeration with a static transition table.
pub trait LifecycleState:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = LifecycleError>
    + Send
    + Sync
    + 'static
{
    /// The entity kind this machine belongs to.
    const KIND: EntityKind;

    /// Document field this machine is stored under (`status`, `stage`,
    /// `fundingStage`).
    const STATUS_FIELD: &'static str;

    /// Whether the graph is strictly enforced. Reviewed workflows are
    /// strict; the research workflow is an advisory set.
    const STRICT: bool = true;

    /// Every declared state, in declaration order.
    fn all() -> &'static [Self];

    /// The state a freshly created entity starts in.
    fn initial() -> Self;

    /// States reachable by one legal transition. Empty for terminal
    /// states.
    fn legal_transitions(&self) -> &'static [Self];

    /// The snake_case wire token stored in documents.
    fn as_str(&self) -> &'static str;

    /// Human-readable label for badges.
    fn label(&self) -> &'static str;

    /// Accent color for badges.
    fn badge_color(&self) -> &'static str;

    /// A state with no outgoing edges.
    fn is_terminal(&self) -> bool {
        self.legal_transitions().is_empty()
    }

    /// True iff `target` is one legal transition away.
    fn can_reach(&self, target: Self) -> bool {
        self.legal_transitions().contains(&target)
    }
}

/// Parse a wire token into a state, reporting the kind on failure.
pub fn parse_state<S: LifecycleState>(token: &str) -> Result<S, LifecycleError> {
    token.parse()
}

pub(crate) fn unknown_state<S: LifecycleState>(token: &str) -> LifecycleError {
    LifecycleError::UnknownState {
        kind: S::KIND,
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::innovation::InnovationStage;
    use super::ipr::IprStatus;
    use super::research::ResearchStatus;
    use super::startup::{FundingStage, StartupStage};
    use super::*;

    fn check_machine<S: LifecycleState>() {
        // Wire tokens round-trip.
        for state in S::all() {
            let parsed: S = state.as_str().parse().unwrap();
            assert_eq!(parsed, *state);
        }
        // Every transition target is a declared state (closed graph).
        for state in S::all() {
            for target in state.legal_transitions() {
                assert!(S::all().contains(target));
            }
        }
        // The initial state is declared.
        assert!(S::all().contains(&S::initial()));
        // Unknown tokens are reported with the right kind.
        let err = "definitely_not_a_state".parse::<S>().unwrap_err();
        assert_eq!(
            err,
            LifecycleError::UnknownState {
                kind: S::KIND,
                token: "definitely_not_a_state".to_string(),
            }
        );
    }

    #[test]
    fn test_all_machines_are_closed_graphs() {
        check_machine::<ResearchStatus>();
        check_machine::<IprStatus>();
        check_machine::<InnovationStage>();
        check_machine::<StartupStage>();
        check_machine::<FundingStage>();
    }

    #[test]
    fn test_terminal_states_have_no_edges() {
        assert!(IprStatus::Granted.is_terminal());
        assert!(IprStatus::Rejected.is_terminal());
        assert!(InnovationStage::MarketReady.is_terminal());
        assert!(StartupStage::Exit.is_terminal());
        assert!(FundingStage::SeriesC.is_terminal());
        // Innovation rejection is deliberately NOT terminal.
        assert!(!InnovationStage::Rejected.is_terminal());
    }
}
