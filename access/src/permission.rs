//! Permission vocabulary and the static role → permission table.
//!
//! Permissions are never assigned to identities directly; they derive
//! transitively through the identity's role. The table is total (every
//! role maps to a non-empty set) and the admin set carries the
//! [`Permission::FullAccess`] sentinel, which satisfies every check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccessError;
use crate::role::Role;

/// A named capability token checked before gating an action or view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum Permission {
    // Oversight
    ViewAllData,
    GenerateReports,
    ManageFunding,
    ApproveApplications,
    ViewAnalytics,

    // Research
    SubmitResearch,
    ViewResearch,
    Collaborate,
    ApplyForFunding,
    ManageProfile,

    // Entrepreneurship
    SubmitStartup,
    ViewOpportunities,
    AccessResources,
    RegisterStartup,
    ManageStartups,

    // Investment
    ViewStartups,
    ManageInvestments,
    AccessReports,

    // Public
    ViewPublicData,
    ViewSuccessStories,

    // Innovation hub
    SubmitInnovation,
    ManageInnovations,
    CollaborateInnovation,

    // IPR
    SubmitIpr,

    // Administration
    FullAccess,
    ManageUsers,
    SystemSettings,
}

impl Permission {
    /// The wire token checked by the presentation shell.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewAllData => "view_all_data",
            Permission::GenerateReports => "generate_reports",
            Permission::ManageFunding => "manage_funding",
            Permission::ApproveApplications => "approve_applications",
            Permission::ViewAnalytics => "view_analytics",
            Permission::SubmitResearch => "submit_research",
            Permission::ViewResearch => "view_research",
            Permission::Collaborate => "collaborate",
            Permission::ApplyForFunding => "apply_for_funding",
            Permission::ManageProfile => "manage_profile",
            Permission::SubmitStartup => "submit_startup",
            Permission::ViewOpportunities => "view_opportunities",
            Permission::AccessResources => "access_resources",
            Permission::RegisterStartup => "register_startup",
            Permission::ManageStartups => "manage_startups",
            Permission::ViewStartups => "view_startups",
            Permission::ManageInvestments => "manage_investments",
            Permission::AccessReports => "access_reports",
            Permission::ViewPublicData => "view_public_data",
            Permission::ViewSuccessStories => "view_success_stories",
            Permission::SubmitInnovation => "submit_innovation",
            Permission::ManageInnovations => "manage_innovations",
            Permission::CollaborateInnovation => "collaborate_innovation",
            Permission::SubmitIpr => "submit_ipr",
            Permission::FullAccess => "full_access",
            Permission::ManageUsers => "manage_users",
            Permission::SystemSettings => "system_settings",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view_all_data" => Ok(Permission::ViewAllData),
            "generate_reports" => Ok(Permission::GenerateReports),
            "manage_funding" => Ok(Permission::ManageFunding),
            "approve_applications" => Ok(Permission::ApproveApplications),
            "view_analytics" => Ok(Permission::ViewAnalytics),
            "submit_research" => Ok(Permission::SubmitResearch),
            "view_research" => Ok(Permission::ViewResearch),
            "collaborate" => Ok(Permission::Collaborate),
            "apply_for_funding" => Ok(Permission::ApplyForFunding),
            "manage_profile" => Ok(Permission::ManageProfile),
            "submit_startup" => Ok(Permission::SubmitStartup),
            "view_opportunities" => Ok(Permission::ViewOpportunities),
            "access_resources" => Ok(Permission::AccessResources),
            "register_startup" => Ok(Permission::RegisterStartup),
            "manage_startups" => Ok(Permission::ManageStartups),
            "view_startups" => Ok(Permission::ViewStartups),
            "manage_investments" => Ok(Permission::ManageInvestments),
            "access_reports" => Ok(Permission::AccessReports),
            "view_public_data" => Ok(Permission::ViewPublicData),
            "view_success_stories" => Ok(Permission::ViewSuccessStories),
            "submit_innovation" => Ok(Permission::SubmitInnovation),
            "manage_innovations" => Ok(Permission::ManageInnovations),
            "collaborate_innovation" => Ok(Permission::CollaborateInnovation),
            "submit_ipr" => Ok(Permission::SubmitIpr),
            "full_access" => Ok(Permission::FullAccess),
            "manage_users" => Ok(Permission::ManageUsers),
            "system_settings" => Ok(Permission::SystemSettings),
            other => Err(AccessError::UnknownPermission(other.to_string())),
        }
    }
}

/// Static role → permission table.
///
/// Pure and total: every role maps to a non-empty set, and the same role
/// always yields the same slice. The tokens the screens check but no role
/// lists directly (`manage_innovations`, `manage_startups`, ...) are
/// reachable only through the admin `full_access` wildcard.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::GovernmentOfficial => &[
            Permission::ViewAllData,
            Permission::GenerateReports,
            Permission::ManageFunding,
            Permission::ApproveApplications,
            Permission::ViewAnalytics,
        ],
        Role::Researcher => &[
            Permission::SubmitResearch,
            Permission::ViewResearch,
            Permission::Collaborate,
            Permission::ApplyForFunding,
            Permission::ManageProfile,
        ],
        Role::Entrepreneur => &[
            Permission::SubmitStartup,
            Permission::ViewOpportunities,
            Permission::ApplyForFunding,
            Permission::ManageProfile,
            Permission::AccessResources,
        ],
        Role::Investor => &[
            Permission::ViewStartups,
            Permission::ViewOpportunities,
            Permission::ManageInvestments,
            Permission::AccessReports,
            Permission::ManageProfile,
        ],
        Role::PublicUser => &[
            Permission::ViewPublicData,
            Permission::AccessResources,
            Permission::ViewSuccessStories,
        ],
        Role::Admin => &[
            Permission::FullAccess,
            Permission::ManageUsers,
            Permission::SystemSettings,
            Permission::ViewAllData,
            Permission::GenerateReports,
        ],
    }
}

/// True iff the role's set contains `permission` or the wildcard.
pub fn role_grants(role: Role, permission: Permission) -> bool {
    let set = permissions_for(role);
    set.contains(&permission) || set.contains(&Permission::FullAccess)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_permissions() {
        for role in Role::ALL {
            assert!(
                !permissions_for(role).is_empty(),
                "role {role} maps to an empty set"
            );
        }
    }

    #[test]
    fn test_table_is_deterministic() {
        for role in Role::ALL {
            assert_eq!(permissions_for(role), permissions_for(role));
        }
    }

    #[test]
    fn test_admin_wildcard_satisfies_everything() {
        // Including tokens the admin set does not list literally.
        assert!(role_grants(Role::Admin, Permission::ManageInnovations));
        assert!(role_grants(Role::Admin, Permission::ApproveApplications));
        assert!(role_grants(Role::Admin, Permission::ViewPublicData));
    }

    #[test]
    fn test_researcher_cannot_approve() {
        assert!(!role_grants(Role::Researcher, Permission::ApproveApplications));
        assert!(role_grants(Role::Researcher, Permission::SubmitResearch));
    }

    #[test]
    fn test_manage_tokens_require_wildcard() {
        // No role other than admin reaches the manage_* review tokens.
        for role in Role::ALL {
            if role == Role::Admin {
                continue;
            }
            assert!(!role_grants(role, Permission::ManageInnovations));
            assert!(!role_grants(role, Permission::ManageStartups));
        }
    }

    #[test]
    fn test_token_roundtrip() {
        for role in Role::ALL {
            for p in permissions_for(role) {
                let parsed: Permission = p.as_str().parse().unwrap();
                assert_eq!(parsed, *p);
            }
        }
    }
}
