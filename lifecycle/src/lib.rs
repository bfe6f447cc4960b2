//! Entity lifecycle model for the innovation ecosystem platform.
//!
//! Each entity kind carries a closed state enumeration and a static
//! transition table: states are nodes, legal transitions are edges, and
//! some states are terminal. Status never changes by overwrite — only
//! through a declared transition, which also appends exactly one
//! immutable [`AuditEntry`].
//!
//! # Key components
//!
//! - [`EntityKind`]: the four tracked kinds and their required
//!   transition permissions
//! - [`LifecycleState`]: the trait every state enumeration implements
//! - [`states`]: one module per kind with the literal transition tables
//! - [`AuditTrail`]: append-only in-memory transition history
//!
//! # Example
//!
//! ```
//! use lifecycle::{IprStatus, LifecycleState};
//!
//! let status = IprStatus::Filed;
//! assert!(status.legal_transitions().contains(&IprStatus::Published));
//! assert!(IprStatus::Granted.is_terminal());
//! ```

pub mod audit;
pub mod error;
pub mod kind;
pub mod states;

pub use audit::{AuditEntry, AuditStats, AuditTrail};
pub use error::LifecycleError;
pub use kind::EntityKind;
pub use states::innovation::InnovationStage;
pub use states::ipr::IprStatus;
pub use states::research::ResearchStatus;
pub use states::startup::{FundingStage, StartupStage};
pub use states::LifecycleState;
