//! Access control model for the innovation ecosystem platform.
//!
//! Maps an authenticated identity to a single role and a fixed set of
//! permissions, and answers every screen-level gating question the
//! presentation shell asks:
//!
//! - [`Role`]: the six platform roles, exactly one per identity
//! - [`Permission`]: the fixed capability vocabulary
//! - [`permissions_for`]: the static role → permission table
//! - [`Session`]: the resolved profile context with fail-closed checks
//! - [`FeatureFlag`]: declarative per-role feature surface table
//!
//! Permission checks are pure and require no I/O; profile resolution is
//! the job of an external identity provider feeding a [`SessionHandle`].
//!
//! # Example
//!
//! ```
//! use access::{Permission, Role, Session};
//!
//! let session = Session::unresolved();
//! // Fail-closed: nothing is permitted until a profile resolves.
//! assert!(!session.has_permission(Permission::ViewAllData));
//! ```

pub mod error;
pub mod features;
pub mod permission;
pub mod profile;
pub mod role;
pub mod session;

pub use error::AccessError;
pub use features::{features_for, FeatureFlag};
pub use permission::{permissions_for, Permission};
pub use profile::{Profile, ProfileUpdate};
pub use role::Role;
pub use session::{AuthEvent, Session, SessionHandle};
