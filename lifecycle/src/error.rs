//! Error types for lifecycle operations.

use crate::kind::EntityKind;

/// Errors raised by state parsing and transition checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// State token not in the kind's declared enumeration.
    ///
    /// This is a data-integrity failure in the backing store, not a user
    /// mistake; it is surfaced to the caller rather than ignored.
    #[error("unknown {kind} state: {token}")]
    UnknownState { kind: EntityKind, token: String },

    /// Target state not reachable from the current state, or the actor
    /// lacks the kind's transition permission.
    #[error("illegal {kind} transition: {from} -> {to}")]
    IllegalTransition {
        kind: EntityKind,
        from: String,
        to: String,
    },
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
