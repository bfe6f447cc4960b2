//! Platform roles.
//!
//! Every identity holds exactly one role, assigned at signup. Roles are
//! never checked directly for capabilities — they resolve to permission
//! sets through [`crate::permissions_for`]. Direct role equality is used
//! only for ownership-scoped visibility rules (e.g. investor dashboards).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccessError;

/// The single category assigned to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum Role {
    /// Reviews applications, manages funding, sees all data
    GovernmentOfficial,
    /// Submits and tracks research projects
    Researcher,
    /// Registers startups and innovation ideas
    Entrepreneur,
    /// Browses startups and manages investments
    Investor,
    /// Read-only access to public data
    PublicUser,
    /// Holds the `full_access` wildcard
    Admin,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::GovernmentOfficial,
        Role::Researcher,
        Role::Entrepreneur,
        Role::Investor,
        Role::PublicUser,
        Role::Admin,
    ];

    /// The wire token stored in user documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GovernmentOfficial => "government_official",
            Role::Researcher => "researcher",
            Role::Entrepreneur => "entrepreneur",
            Role::Investor => "investor",
            Role::PublicUser => "public_user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "government_official" => Ok(Role::GovernmentOfficial),
            "researcher" => Ok(Role::Researcher),
            "entrepreneur" => Ok(Role::Entrepreneur),
            "investor" => Ok(Role::Investor),
            "public_user" => Ok(Role::PublicUser),
            "admin" => Ok(Role::Admin),
            other => Err(AccessError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_token_roundtrip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_is_reported() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, AccessError::UnknownRole("superuser".to_string()));
    }

    #[test]
    fn test_serde_tokens_match_wire_tokens() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
