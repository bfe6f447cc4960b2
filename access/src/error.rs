//! Error types for access control operations.

/// Errors raised while resolving roles and permissions.
///
/// Both variants indicate corrupted or out-of-vocabulary data coming from
/// the profile store, never a normal denial: a failed permission check is
/// a plain `false`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Role token not in the platform vocabulary
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Permission token not in the platform vocabulary
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
}

pub type Result<T> = std::result::Result<T, AccessError>;
