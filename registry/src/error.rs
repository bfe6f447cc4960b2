//! Error types for registry operations.

use access::{AccessError, Permission};
use lifecycle::LifecycleError;

/// Errors surfaced by the registry to the presentation layer.
///
/// None of these carry user-facing messaging — the shell decides how to
/// present them. Nothing is silently swallowed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Role or permission vocabulary failure from the access model
    #[error(transparent)]
    Access(#[from] AccessError),

    /// State parsing or transition failure from the lifecycle model
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// A guard failed that the UI should never have offered.
    ///
    /// Defensive fallback for non-transition actions (creation,
    /// collaboration); transition failures use
    /// [`LifecycleError::IllegalTransition`] instead.
    #[error("permission denied: requires {required}")]
    PermissionDenied { required: Permission },

    /// The entity's stored state no longer matches what the caller read.
    ///
    /// Retryable: re-read the entity and re-evaluate the transition.
    #[error("concurrent modification of {entity_id}: expected {expected}, found {actual}")]
    ConcurrentModification {
        entity_id: String,
        expected: String,
        actual: String,
    },

    /// Document not present in the store
    #[error("not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Backing store failed mid-operation.
    ///
    /// The write may or may not have landed; callers must re-query entity
    /// state before retrying, never blindly retry the write.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
