//! Collaboration requests on innovation ideas.
//!
//! A plain record, not a state machine: requests are created `pending`
//! and any further workflow belongs to the shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the requester is offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum CollaborationKind {
    Mentorship,
    Funding,
    TechnicalSupport,
    Partnership,
}

impl CollaborationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollaborationKind::Mentorship => "mentorship",
            CollaborationKind::Funding => "funding",
            CollaborationKind::TechnicalSupport => "technical_support",
            CollaborationKind::Partnership => "partnership",
        }
    }
}

/// A pending collaboration request from a non-owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CollaborationRequest {
    pub id: String,
    pub innovation_id: String,
    pub innovation_title: String,
    pub requester_uid: String,
    pub owner_uid: String,
    pub kind: CollaborationKind,
    /// Always created as `pending`
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl CollaborationRequest {
    pub fn new(
        innovation_id: impl Into<String>,
        innovation_title: impl Into<String>,
        requester_uid: impl Into<String>,
        owner_uid: impl Into<String>,
        kind: CollaborationKind,
    ) -> Self {
        let innovation_title = innovation_title.into();
        let message = format!(
            "I would like to collaborate on your innovation \"{}\" with {}.",
            innovation_title,
            kind.as_str().replace('_', " ")
        );
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            innovation_id: innovation_id.into(),
            innovation_title,
            requester_uid: requester_uid.into(),
            owner_uid: owner_uid.into(),
            kind,
            status: "pending".to_string(),
            message,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_starts_pending_with_message() {
        let request = CollaborationRequest::new(
            "idea-1",
            "Water purifier",
            "uid-r",
            "uid-o",
            CollaborationKind::TechnicalSupport,
        );
        assert_eq!(request.status, "pending");
        assert!(request.message.contains("Water purifier"));
        assert!(request.message.contains("technical support"));
    }
}
