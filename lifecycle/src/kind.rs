//! Entity kinds and their transition permissions.

use serde::{Deserialize, Serialize};
use std::fmt;

use access::Permission;

/// The four tracked entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum EntityKind {
    ResearchProject,
    IprApplication,
    InnovationIdea,
    Startup,
}

impl EntityKind {
    /// The permission an actor must hold to invoke a transition on this
    /// kind.
    ///
    /// Ownership alone never grants transitions in the reviewed
    /// workflows — IPR, Innovation and Startup stage changes are reviewer
    /// actions. Research is the owner-driven advisory workflow and keys
    /// off `submit_research`.
    pub fn required_permission(&self) -> Permission {
        match self {
            EntityKind::ResearchProject => Permission::SubmitResearch,
            EntityKind::IprApplication => Permission::ApproveApplications,
            EntityKind::InnovationIdea => Permission::ManageInnovations,
            EntityKind::Startup => Permission::ManageStartups,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::ResearchProject => "research_project",
            EntityKind::IprApplication => "ipr_application",
            EntityKind::InnovationIdea => "innovation_idea",
            EntityKind::Startup => "startup",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
