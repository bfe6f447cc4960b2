//! Per-role feature surface table.
//!
//! The shell's tab bar used to be gated by inline chains of permission
//! checks recomputed on every render. This table is the declarative
//! equivalent, computed once per session: each role maps to the fixed
//! set of top-level surfaces it may see.

use serde::{Deserialize, Serialize};

use crate::permission::{role_grants, Permission};
use crate::role::Role;

/// A top-level surface the shell may present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum FeatureFlag {
    Dashboard,
    Research,
    Ipr,
    Innovation,
    Startups,
}

/// The surfaces a role may see.
///
/// Derived from the permission table: Research requires `view_research`
/// or `submit_research`; IPR requires `view_opportunities` or
/// `manage_profile`; Innovation requires `view_opportunities` or
/// `submit_startup`; Startups requires `view_startups` or
/// `submit_startup`. Dashboard is unconditional. The admin wildcard
/// satisfies all of them.
pub fn features_for(role: Role) -> &'static [FeatureFlag] {
    match role {
        Role::GovernmentOfficial => &[FeatureFlag::Dashboard],
        Role::Researcher => &[FeatureFlag::Dashboard, FeatureFlag::Research, FeatureFlag::Ipr],
        Role::Entrepreneur | Role::Investor => &[
            FeatureFlag::Dashboard,
            FeatureFlag::Ipr,
            FeatureFlag::Innovation,
            FeatureFlag::Startups,
        ],
        Role::PublicUser => &[FeatureFlag::Dashboard],
        Role::Admin => &[
            FeatureFlag::Dashboard,
            FeatureFlag::Research,
            FeatureFlag::Ipr,
            FeatureFlag::Innovation,
            FeatureFlag::Startups,
        ],
    }
}

/// Whether a role's permissions unlock a given surface.
///
/// This is the rule the static table is derived from; the table and this
/// function must agree (enforced by test).
pub fn permissions_unlock(role: Role, flag: FeatureFlag) -> bool {
    let any = |ps: &[Permission]| ps.iter().any(|p| role_grants(role, *p));
    match flag {
        FeatureFlag::Dashboard => true,
        FeatureFlag::Research => any(&[Permission::ViewResearch, Permission::SubmitResearch]),
        FeatureFlag::Ipr => any(&[Permission::ViewOpportunities, Permission::ManageProfile]),
        FeatureFlag::Innovation => any(&[Permission::ViewOpportunities, Permission::SubmitStartup]),
        FeatureFlag::Startups => any(&[Permission::ViewStartups, Permission::SubmitStartup]),
    }
}
