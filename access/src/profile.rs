//! Resolved user profiles.
//!
//! A profile is the document the identity provider hands back after
//! authentication. The `uid` is immutable; the role is assigned at
//! signup and changed only by an administrator-equivalent identity,
//! which is outside this model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// An authenticated identity's resolved profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Profile {
    /// Opaque unique identifier, immutable after signup
    pub uid: String,
    /// Account email
    pub email: String,
    /// Display name
    pub name: String,
    /// The single role assigned to this identity
    pub role: Role,
    /// Organization, if provided at signup
    #[serde(default)]
    pub organization: String,
    /// Designation, if provided at signup
    #[serde(default)]
    pub designation: String,
    /// Contact phone, if provided at signup
    #[serde(default)]
    pub phone: String,
    /// Whether the account has been verified
    #[serde(default)]
    pub verified: bool,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// Last metadata update
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a fresh, unverified profile at signup time.
    pub fn new(
        uid: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            uid: uid.into(),
            email: email.into(),
            name: name.into(),
            role,
            organization: String::new(),
            designation: String::new(),
            phone: String::new(),
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the organization.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Set the designation.
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = designation.into();
        self
    }

    /// Apply an owner-initiated metadata edit, bumping `updated_at`.
    ///
    /// Role and uid are deliberately not editable through this path.
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(organization) = update.organization {
            self.organization = organization;
        }
        if let Some(designation) = update.designation {
            self.designation = designation;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        self.updated_at = Utc::now();
    }
}

/// A partial, owner-editable view of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
}
