//! Session context with a fail-closed profile slot.
//!
//! The presentation shell holds exactly one [`SessionHandle`] and passes
//! [`Session`] snapshots down to whatever needs a gating decision. The
//! slot is populated on successful authentication, cleared on logout, and
//! treated as absent during the async profile-load window — an unresolved
//! session denies every permission rather than leaking privileged UI.

use tokio::sync::watch;
use tracing::info;

use crate::features::{features_for, FeatureFlag};
use crate::permission::{role_grants, Permission};
use crate::profile::{Profile, ProfileUpdate};
use crate::role::Role;

/// One auth-state change pushed by the identity provider.
///
/// The provider delivers one event per change; the latest event always
/// wins and no history is kept.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// Authentication succeeded and the profile resolved
    SignedIn(Profile),
    /// Logout, token expiry, or profile resolution failure
    SignedOut,
}

/// An immutable snapshot of the current authentication state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<Profile>,
}

impl Session {
    /// A session with no resolved profile. Denies everything.
    pub fn unresolved() -> Self {
        Self { profile: None }
    }

    /// A session for a resolved profile.
    pub fn resolved(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    /// The resolved profile, if any.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// The authenticated uid, if resolved.
    pub fn uid(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.uid.as_str())
    }

    /// True iff a profile has resolved.
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Answer a permission query.
    ///
    /// Fail-closed: an unresolved session returns `false` for every
    /// permission. Otherwise true iff the role's set contains the
    /// permission or the `full_access` wildcard.
    pub fn has_permission(&self, permission: Permission) -> bool {
        match &self.profile {
            Some(profile) => role_grants(profile.role, permission),
            None => false,
        }
    }

    /// Direct role equality, used by ownership-scoped visibility rules.
    pub fn is_role(&self, role: Role) -> bool {
        self.profile.as_ref().map(|p| p.role) == Some(role)
    }

    /// The feature surfaces this session may see. Empty when unresolved.
    pub fn features(&self) -> &'static [FeatureFlag] {
        match &self.profile {
            Some(profile) => features_for(profile.role),
            None => &[],
        }
    }
}

/// Shared session slot fed by the identity provider.
///
/// Built on a watch channel so subscribers always observe the latest
/// auth state: one notification per change, last value wins.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: watch::Sender<Session>,
}

impl SessionHandle {
    /// Create a handle in the unresolved (load-window) state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Session::unresolved());
        Self { tx }
    }

    /// Apply one auth-state change from the provider.
    pub fn apply(&self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(profile) => {
                info!(uid = %profile.uid, role = %profile.role, "session resolved");
                self.tx.send_replace(Session::resolved(profile));
            }
            AuthEvent::SignedOut => {
                info!("session cleared");
                self.tx.send_replace(Session::unresolved());
            }
        }
    }

    /// Snapshot the current session.
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Subscribe to auth-state changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Apply an owner-initiated metadata edit to the resolved profile.
    ///
    /// No-op when unresolved; returns the updated profile when applied.
    pub fn update_profile(&self, update: ProfileUpdate) -> Option<Profile> {
        let mut updated = None;
        self.tx.send_if_modified(|session| {
            if let Some(profile) = session.profile.as_mut() {
                profile.apply_update(update.clone());
                updated = Some(profile.clone());
                true
            } else {
                false
            }
        });
        updated
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}
