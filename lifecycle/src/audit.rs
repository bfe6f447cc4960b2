//! Audit trail for entity transitions.
//!
//! Every successful transition appends exactly one immutable entry. The
//! trail is the only evidence of who authorized a status change, so
//! entries are never mutated or deleted; the shell renders them
//! most-recent-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::kind::EntityKind;
use crate::states::LifecycleState;

/// An immutable record of one transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AuditEntry {
    /// Unique entry ID
    pub id: String,
    /// Entity the transition applied to
    pub entity_id: String,
    /// Kind of that entity
    pub kind: EntityKind,
    /// State before the transition (wire token)
    pub from_state: String,
    /// State after the transition (wire token)
    pub to_state: String,
    /// Identity that invoked the transition
    pub actor_uid: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Free-form description supplied by the actor
    pub description: String,
}

impl AuditEntry {
    /// Record a transition between two typed states.
    pub fn record<S: LifecycleState>(
        entity_id: impl Into<String>,
        from: S,
        to: S,
        actor_uid: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            entity_id: entity_id.into(),
            kind: S::KIND,
            from_state: from.as_str().to_string(),
            to_state: to.as_str().to_string(),
            actor_uid: actor_uid.into(),
            timestamp: Utc::now(),
            description: description.into(),
        }
    }
}

/// Append-only in-memory transition history.
///
/// Entries are kept newest-first. For a given entity the entries are
/// totally ordered by timestamp.
pub struct AuditTrail {
    entries: Arc<RwLock<VecDeque<AuditEntry>>>,
}

impl AuditTrail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    /// Append an entry.
    pub async fn append(&self, entry: AuditEntry) {
        tracing::debug!(
            entity_id = %entry.entity_id,
            from = %entry.from_state,
            to = %entry.to_state,
            actor = %entry.actor_uid,
            "transition recorded"
        );
        let mut entries = self.entries.write().await;
        entries.push_front(entry);
    }

    /// Entries for one entity, most recent first.
    pub async fn for_entity(&self, entity_id: &str) -> Vec<AuditEntry> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|e| e.entity_id == entity_id)
            .cloned()
            .collect()
    }

    /// Entries invoked by one actor, most recent first.
    pub async fn for_actor(&self, actor_uid: &str, limit: usize) -> Vec<AuditEntry> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|e| e.actor_uid == actor_uid)
            .take(limit)
            .cloned()
            .collect()
    }

    /// The newest entries across all entities.
    pub async fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).cloned().collect()
    }

    /// Total entry count.
    pub async fn count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Summary statistics.
    pub async fn stats(&self) -> AuditStats {
        let entries = self.entries.read().await;
        let total = entries.len();
        let per_kind = |kind: EntityKind| entries.iter().filter(|e| e.kind == kind).count();
        AuditStats {
            total,
            research: per_kind(EntityKind::ResearchProject),
            ipr: per_kind(EntityKind::IprApplication),
            innovation: per_kind(EntityKind::InnovationIdea),
            startup: per_kind(EntityKind::Startup),
        }
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStats {
    /// Total entries
    pub total: usize,
    /// Research project transitions
    pub research: usize,
    /// IPR transitions
    pub ipr: usize,
    /// Innovation transitions
    pub innovation: usize,
    /// Startup transitions (stage and funding)
    pub startup: usize,
}
